//! Named callback registry.
//!
//! A [`CallbackRegistry`] maps string identifiers to toggleable callbacks.
//! Callers address a subscription by name to disable, re-enable or remove it,
//! without holding any handle object. The price is identifier hygiene: names
//! must be unique, and the registry owner decides when entries go away.
//!
//! Identifiers are owned strings compared by content and case-sensitively, so
//! unrelated call sites can agree on a well-known name such as
//! `"ClassName::method"`.
//!
//! # Reentrancy
//!
//! [`invoke`](CallbackRegistry::invoke) borrows the registry immutably while
//! every mutating operation needs `&mut self`, so mutation during a dispatch
//! round does not compile. A registry shared through a `RefCell` and mutated
//! from inside one of its own callbacks panics with a borrow error; that use
//! is unsupported.

use std::{
    cell::RefCell,
    collections::{HashMap, hash_map},
    fmt,
    rc::Rc,
};
use tidings_core::{Callback, RegistryError};

const DEFAULT_LABEL: &str = "registry";

/// One registered callback and its enabled flag.
struct Entry<A: ?Sized> {
    callback: Callback<A>,
    enabled: bool,
}

impl<A: ?Sized> Entry<A> {
    /// Enabled and bound to something callable.
    fn is_active(&self) -> bool {
        self.enabled && !self.callback.is_empty()
    }

    fn call(&self, args: &A) {
        if self.is_active() {
            self.callback.call(args);
        }
    }
}

impl<A: ?Sized> fmt::Debug for Entry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("enabled", &self.enabled)
            .field("callback", &self.callback)
            .finish()
    }
}

/// A string-keyed set of toggleable callbacks sharing the signature `A`.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = CallbackRegistry::<i32>::new();
/// registry.register("a", |v| println!("a got {v}"))?;
/// registry.register("b", |v| println!("b got {v}"))?;
///
/// registry.invoke(&5); // both
/// registry.unregister("a");
/// registry.invoke(&7); // only "b"
/// ```
pub struct CallbackRegistry<A: ?Sized = ()> {
    entries: HashMap<String, Entry<A>>,
    label: &'static str,
}

impl<A: ?Sized> CallbackRegistry<A> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty registry with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            label: DEFAULT_LABEL,
        }
    }

    /// Start configuring a registry.
    pub fn builder() -> RegistryBuilder<A> {
        RegistryBuilder::new()
    }

    /// The name used for this registry in log messages.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Register an enabled callback under `identifier`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateIdentifier`] if the identifier is taken. The
    /// registry is left unchanged.
    pub fn register<F>(
        &mut self,
        identifier: impl Into<String>,
        callback: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&A) + 'static,
    {
        self.register_callback(identifier, Callback::new(callback))
    }

    /// Register a prebuilt [`Callback`] under `identifier`.
    ///
    /// An empty callback occupies the identifier but never runs.
    pub fn register_callback(
        &mut self,
        identifier: impl Into<String>,
        callback: Callback<A>,
    ) -> Result<(), RegistryError> {
        self.insert(identifier.into(), callback, true)
    }

    /// Register `method` bound to `instance` under `identifier`.
    ///
    /// The registry does not keep `instance` alive; once it is dropped the
    /// entry stays registered but does nothing.
    pub fn register_method<T, M>(
        &mut self,
        identifier: impl Into<String>,
        instance: &Rc<RefCell<T>>,
        method: M,
    ) -> Result<(), RegistryError>
    where
        A: 'static,
        T: 'static,
        M: Fn(&mut T, &A) + 'static,
    {
        self.register_callback(identifier, Callback::method(instance, method))
    }

    /// Remove the entry under `identifier`.
    ///
    /// Returns `true` if an entry was removed. Removing an unknown identifier
    /// is not an error.
    pub fn unregister(&mut self, identifier: &str) -> bool {
        let removed = self.entries.remove(identifier).is_some();

        #[cfg(feature = "tracing")]
        if removed {
            tracing::debug!(registry = self.label, identifier, "unregistered callback");
        }

        removed
    }

    /// Enable or disable the entry under `identifier`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownIdentifier`] if nothing is registered under
    /// `identifier`.
    pub fn set_enabled(&mut self, identifier: &str, enabled: bool) -> Result<(), RegistryError> {
        match self.entries.get_mut(identifier) {
            Some(entry) => {
                entry.enabled = enabled;
                Ok(())
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    registry = self.label,
                    identifier,
                    enabled,
                    "set_enabled on unknown identifier"
                );
                Err(RegistryError::UnknownIdentifier(identifier.to_owned()))
            }
        }
    }

    /// Call every enabled callback with `args`.
    ///
    /// The order is unspecified. A panicking callback aborts the rest of the
    /// round and the panic reaches the caller.
    pub fn invoke(&self, args: &A) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            registry = self.label,
            active = self.entries.values().filter(|entry| entry.is_active()).count(),
            registered = self.entries.len(),
            "invoking callbacks"
        );

        for entry in self.entries.values() {
            entry.call(args);
        }
    }

    /// Returns `true` if `identifier` is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// The enabled flag of `identifier`, or `None` if it is not registered.
    pub fn is_enabled(&self, identifier: &str) -> Option<bool> {
        self.entries.get(identifier).map(|entry| entry.enabled)
    }

    /// Number of registered entries, enabled or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The registered identifiers, in unspecified order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn insert(
        &mut self,
        identifier: String,
        callback: Callback<A>,
        enabled: bool,
    ) -> Result<(), RegistryError> {
        match self.entries.entry(identifier) {
            hash_map::Entry::Occupied(occupied) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    registry = self.label,
                    identifier = %occupied.key(),
                    "duplicate callback identifier"
                );
                Err(RegistryError::DuplicateIdentifier(occupied.key().clone()))
            }
            hash_map::Entry::Vacant(vacant) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    registry = self.label,
                    identifier = %vacant.key(),
                    enabled,
                    "registered callback"
                );
                vacant.insert(Entry { callback, enabled });
                Ok(())
            }
        }
    }
}

impl<A: ?Sized> Default for CallbackRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for CallbackRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("label", &self.label)
            .field("entries", &self.entries)
            .finish()
    }
}

/// Builder for constructing a [`CallbackRegistry`].
///
/// Registrations are recorded in order and validated by
/// [`build`](RegistryBuilder::build).
pub struct RegistryBuilder<A: ?Sized = ()> {
    label: &'static str,
    capacity: usize,
    entries: Vec<(String, Callback<A>, bool)>,
}

impl<A: ?Sized> Default for RegistryBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> RegistryBuilder<A> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            label: DEFAULT_LABEL,
            capacity: 0,
            entries: Vec::new(),
        }
    }

    /// Name the registry in log messages.
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Reserve room for at least `capacity` entries.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Register an enabled callback.
    pub fn register<F>(mut self, identifier: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&A) + 'static,
    {
        self.entries
            .push((identifier.into(), Callback::new(callback), true));
        self
    }

    /// Register a callback that starts disabled.
    pub fn register_disabled<F>(mut self, identifier: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&A) + 'static,
    {
        self.entries
            .push((identifier.into(), Callback::new(callback), false));
        self
    }

    /// Register an enabled method bound to `instance`.
    pub fn register_method<T, M>(
        mut self,
        identifier: impl Into<String>,
        instance: &Rc<RefCell<T>>,
        method: M,
    ) -> Self
    where
        A: 'static,
        T: 'static,
        M: Fn(&mut T, &A) + 'static,
    {
        self.entries
            .push((identifier.into(), Callback::method(instance, method), true));
        self
    }

    /// Build the registry.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateIdentifier`] for the first identifier that
    /// was registered twice.
    pub fn build(self) -> Result<CallbackRegistry<A>, RegistryError> {
        let mut registry = CallbackRegistry {
            entries: HashMap::with_capacity(self.capacity.max(self.entries.len())),
            label: self.label,
        };
        for (identifier, callback, enabled) in self.entries {
            registry.insert(identifier, callback, enabled)?;
        }
        Ok(registry)
    }
}
