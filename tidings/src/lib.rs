//! # tidings - One-to-Many Event Dispatch
//!
//! `tidings` offers two small, independent primitives for delivering one call
//! to many listeners. Both fix the listener signature at construction time,
//! let a listener be suspended without being removed, and dispatch
//! synchronously on the calling thread.
//!
//! | primitive            | subscription is addressed by | subscription ends when       |
//! |----------------------|------------------------------|------------------------------|
//! | [`CallbackRegistry`] | a string identifier          | `unregister` / registry drop |
//! | [`Observable`]       | an [`Observer`] handle       | the handle is dropped        |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tidings::prelude::*;
//!
//! let mut registry = CallbackRegistry::<i32>::new();
//! registry.register("audit", |v| println!("audit {v}"))?;
//! registry.invoke(&5);
//!
//! let observable = Observable::<i32>::new();
//! let observer = observable.create_observer(|v| println!("observer {v}"));
//! observable.broadcast(&5);
//! drop(observer); // unsubscribed
//! ```
//!
//! ## Features
//!
//! - `tracing`: structured logging through the `tracing` crate.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use tidings_core::{Callback, RegistryError, TidingsError};

pub use tidings_std::{CallbackRegistry, Observable, Observer, RegistryBuilder};

/// Named callback registry.
pub mod registry {
    pub use tidings_std::registry::{CallbackRegistry, RegistryBuilder};
}

/// Observer/observable pair.
pub mod observable {
    pub use tidings_std::observable::{Observable, Observer};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use tidings_std::testing::*;
}

/// Prelude module - common imports for Tidings.
///
/// # Usage
///
/// ```rust,ignore
/// use tidings::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Callback, CallbackRegistry, Observable, Observer, RegistryBuilder, RegistryError,
        TidingsError,
    };
}
