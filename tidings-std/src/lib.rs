//! # tidings-std
//!
//! Standard implementations for the Tidings event dispatch primitives.
//!
//! This crate provides:
//! - **Named registry**: [`CallbackRegistry`], [`RegistryBuilder`]
//! - **Scoped subscriptions**: [`Observable`], [`Observer`]
//! - **Testing helpers**: [`testing::Recorder`], [`testing::CallCounter`]
//!
//! The two primitives are independent. Pick the registry when callers need to
//! address subscriptions by name without holding on to anything; pick the
//! observable when a subscription should last exactly as long as a handle.
//!
//! Neither primitive is thread-safe. Both dispatch synchronously.
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events on registration changes, dispatch
//!   rounds and contract violations.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use tidings_core;

// Modules
pub mod observable;
pub mod registry;
pub mod testing;

pub use observable::{Observable, Observer};
pub use registry::{CallbackRegistry, RegistryBuilder};
