//! Error types for Tidings.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`TidingsError`] - Top-level error type for all Tidings operations
//! - [`RegistryError`] - Contract violations on a callback registry
//!
//! Only programmer errors are represented here. Tolerated absence (removing an
//! identifier that is not registered, broadcasting with no listeners, using an
//! observer whose observable is gone) is never an error.

use thiserror::Error;

/// Top-level error type for all Tidings operations.
#[derive(Error, Debug)]
pub enum TidingsError {
    /// A callback registry rejected an operation.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Violated preconditions on a callback registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A callback is already registered under this identifier.
    #[error("identifier already registered: {0}")]
    DuplicateIdentifier(String),

    /// No callback is registered under this identifier.
    #[error("identifier not registered: {0}")]
    UnknownIdentifier(String),
}

impl RegistryError {
    /// The identifier the failed operation was called with.
    pub fn identifier(&self) -> &str {
        match self {
            RegistryError::DuplicateIdentifier(id) | RegistryError::UnknownIdentifier(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_identifier() {
        let err = RegistryError::DuplicateIdentifier("TestClass::callback".into());
        assert_eq!(
            err.to_string(),
            "identifier already registered: TestClass::callback"
        );
        assert_eq!(err.identifier(), "TestClass::callback");
    }

    #[test]
    fn test_top_level_wraps_registry_error() {
        let err: TidingsError = RegistryError::UnknownIdentifier("missing".into()).into();
        assert!(matches!(
            err,
            TidingsError::Registry(RegistryError::UnknownIdentifier(ref id)) if id == "missing"
        ));
        assert_eq!(
            err.to_string(),
            "registry error: identifier not registered: missing"
        );
    }
}
