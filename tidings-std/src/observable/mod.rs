//! Observer/observable pair.
//!
//! An [`Observable`] broadcasts to the [`Observer`]s created from it. Each
//! observer is a scoped subscription: it owns its callback and unsubscribes
//! itself when dropped. Whichever side is dropped first leaves the other in a
//! safe, inert state.
//!
//! # Ownership
//!
//! ```text
//!  Observable ──Rc──▶ RefCell<SlotTable> ──Weak──▶ ObserverState ◀──Rc── Observer
//!                            ▲                                             │
//!                            └──────────────Weak + (index, generation)─────┘
//! ```
//!
//! The observable is the only strong owner of its slot table and each
//! observer is the only strong owner of its state, so:
//!
//! - dropping an observer frees its state and vacates its slot;
//! - dropping the observable frees the table, after which no observer can
//!   upgrade its back-reference.
//!
//! # Reentrancy
//!
//! [`broadcast`](Observable::broadcast) works on a snapshot and does not hold
//! the table borrowed while callbacks run. Observers created during a
//! broadcast are first called on the next one; observers dropped during a
//! broadcast are skipped if their turn has not come yet.

mod observer;
mod slots;

pub use observer::Observer;

use observer::{ObserverState, ObserverTable};
use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};
use tidings_core::Callback;

const DEFAULT_LABEL: &str = "observable";

/// Broadcasts arguments of type `A` to every enabled [`Observer`] created
/// from it.
///
/// # Example
///
/// ```rust,ignore
/// let observable = Observable::<i32>::new();
/// let first = observable.create_observer(|v| println!("first: {v}"));
/// let second = observable.create_observer(|v| println!("second: {v}"));
///
/// observable.broadcast(&3); // both
/// drop(first);
/// observable.broadcast(&4); // only `second`
/// ```
pub struct Observable<A: ?Sized = ()> {
    table: Rc<RefCell<ObserverTable<A>>>,
    label: &'static str,
}

impl<A: ?Sized> Observable<A> {
    /// Create an observable with no observers.
    pub fn new() -> Self {
        Self::labeled(DEFAULT_LABEL)
    }

    /// Create an observable named `label` in log messages.
    pub fn labeled(label: &'static str) -> Self {
        Self {
            table: Rc::new(RefCell::new(ObserverTable::new())),
            label,
        }
    }

    /// The name used for this observable in log messages.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Call every enabled observer with `args`.
    ///
    /// Observers are visited in slot order, which is deterministic for a
    /// given sequence of creations and drops but is not creation order once
    /// slots have been reused. A panicking callback aborts the rest of the
    /// round and the panic reaches the caller.
    pub fn broadcast(&self, args: &A) {
        let snapshot: Vec<Weak<ObserverState<A>>> =
            self.table.borrow().iter().cloned().collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(observable = self.label, observers = snapshot.len(), "broadcast");

        for state in snapshot {
            if let Some(state) = state.upgrade() {
                state.notify(args);
            }
        }
    }

    /// Subscribe `callback`.
    ///
    /// The returned observer is attached immediately and stays subscribed
    /// until it is dropped.
    pub fn create_observer<F>(&self, callback: F) -> Observer<A>
    where
        F: Fn(&A) + 'static,
    {
        self.create_observer_with(Callback::new(callback))
    }

    /// Subscribe a prebuilt [`Callback`].
    ///
    /// An empty callback yields an observer that never fires and reports
    /// [`is_valid`](Observer::is_valid) as `false`.
    pub fn create_observer_with(&self, callback: Callback<A>) -> Observer<A> {
        let state = Rc::new(ObserverState::new(callback));
        let key = self.table.borrow_mut().insert(Rc::downgrade(&state));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            observable = self.label,
            observers = self.table.borrow().len(),
            "observer attached"
        );

        Observer::new(state, Rc::downgrade(&self.table), key, self.label)
    }

    /// Subscribe `method` bound to `instance`.
    ///
    /// The observer does not keep `instance` alive.
    pub fn create_method_observer<T, M>(
        &self,
        instance: &Rc<RefCell<T>>,
        method: M,
    ) -> Observer<A>
    where
        A: 'static,
        T: 'static,
        M: Fn(&mut T, &A) + 'static,
    {
        self.create_observer_with(Callback::method(instance, method))
    }

    /// Subscribe `method` bound to an instance that may already be gone.
    ///
    /// A dead `instance` yields an observer with no callback.
    pub fn create_method_observer_weak<T, M>(
        &self,
        instance: Weak<RefCell<T>>,
        method: M,
    ) -> Observer<A>
    where
        A: 'static,
        T: 'static,
        M: Fn(&mut T, &A) + 'static,
    {
        self.create_observer_with(Callback::method_weak(instance, method))
    }

    /// Number of live observers, enabled or not.
    pub fn observer_count(&self) -> usize {
        self.table.borrow().len()
    }

    /// Returns `true` if no observer is attached.
    pub fn is_empty(&self) -> bool {
        self.observer_count() == 0
    }
}

impl<A: ?Sized> Default for Observable<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> Drop for Observable<A> {
    fn drop(&mut self) {
        #[cfg(feature = "tracing")]
        {
            let orphaned = self.table.borrow().len();
            if orphaned > 0 {
                tracing::debug!(observable = self.label, orphaned, "observable dropped");
            }
        }

        self.table.borrow_mut().clear();
    }
}

impl<A: ?Sized> fmt::Debug for Observable<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("label", &self.label)
            .field("observers", &self.observer_count())
            .finish()
    }
}
