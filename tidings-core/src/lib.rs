//! # tidings-core
//!
//! Core types for the Tidings event dispatch primitives.
//!
//! This crate has minimal dependencies and holds the vocabulary shared by the
//! implementations in `tidings-std`:
//!
//! - [`Callback`] - a possibly empty `Fn(&A)` listener, with method binding
//! - [`TidingsError`] - Top-level error type
//! - [`RegistryError`] - Contract violations on a callback registry
//!
//! # Call Signatures
//!
//! Every primitive is generic over a single argument type `A`. Listeners are
//! called with `&A`:
//!
//! | signature               | `A`                   |
//! |-------------------------|-----------------------|
//! | `()`                    | `()`                  |
//! | `(int)`                 | `i32`                 |
//! | `(int, double, string)` | `(i32, f64, String)`  |
//! | `(text)`                | `str`                 |

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callback;
mod error;

// Re-exports
pub use callback::Callback;
pub use error::{RegistryError, TidingsError};
