//! The subscription handle returned by an [`Observable`](super::Observable).

use super::slots::{SlotKey, SlotTable};
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};
use tidings_core::Callback;

/// The observable's view of one subscriber.
pub(crate) type ObserverTable<A> = SlotTable<Weak<ObserverState<A>>>;

/// Callback and enabled flag of one observer.
///
/// Owned by the [`Observer`]; the observable only keeps a `Weak` to it.
pub(crate) struct ObserverState<A: ?Sized> {
    callback: Callback<A>,
    enabled: Cell<bool>,
}

impl<A: ?Sized> ObserverState<A> {
    pub(crate) fn new(callback: Callback<A>) -> Self {
        Self {
            callback,
            enabled: Cell::new(true),
        }
    }

    pub(crate) fn notify(&self, args: &A) {
        if self.enabled.get() {
            self.callback.call(args);
        }
    }
}

/// A scoped subscription to an [`Observable`](super::Observable).
///
/// The observer owns its callback. Dropping it removes the subscription;
/// dropping the observable first leaves the observer inert: it stays safe to
/// toggle, query and drop, but it will never be called again.
///
/// Observers cannot be cloned. Moving one moves the subscription with it.
#[must_use = "dropping an Observer immediately ends its subscription"]
pub struct Observer<A: ?Sized = ()> {
    state: Rc<ObserverState<A>>,
    table: Weak<RefCell<ObserverTable<A>>>,
    key: SlotKey,
    label: &'static str,
}

impl<A: ?Sized> Observer<A> {
    pub(crate) fn new(
        state: Rc<ObserverState<A>>,
        table: Weak<RefCell<ObserverTable<A>>>,
        key: SlotKey,
        label: &'static str,
    ) -> Self {
        Self {
            state,
            table,
            key,
            label,
        }
    }

    /// Enable or disable delivery. Registration is not affected.
    pub fn set_enabled(&self, enabled: bool) {
        self.state.enabled.set(enabled);
    }

    /// Returns `true` if broadcasts currently reach this observer's callback.
    pub fn is_enabled(&self) -> bool {
        self.state.enabled.get()
    }

    /// Returns `true` while the originating observable is alive and still
    /// lists this observer.
    pub fn is_attached(&self) -> bool {
        self.table
            .upgrade()
            .is_some_and(|table| table.borrow().contains(self.key))
    }

    /// Returns `true` if this observer is attached and has a callback.
    pub fn is_valid(&self) -> bool {
        !self.state.callback.is_empty() && self.is_attached()
    }
}

impl<A: ?Sized> Drop for Observer<A> {
    fn drop(&mut self) {
        let Some(table) = self.table.upgrade() else {
            return;
        };

        #[cfg(feature = "tracing")]
        if table.borrow().contains(self.key) {
            tracing::debug!(observable = self.label, "observer detached");
        }

        table.borrow_mut().remove(self.key);
    }
}

impl<A: ?Sized> fmt::Debug for Observer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("observable", &self.label)
            .field("enabled", &self.is_enabled())
            .field("attached", &self.is_attached())
            .field("callback", &self.state.callback)
            .finish()
    }
}
