//! # Callback
//!
//! The listener value shared by every Tidings primitive.
//!
//! A [`Callback`] wraps an `Fn(&A)`, where `A` is the call signature fixed by
//! the registry or observable that stores it. Listeners receive the dispatched
//! arguments by shared reference, so one dispatch never copies its payload per
//! listener. Several arguments travel as a tuple, none as `()`.
//!
//! A callback may be *empty*. An empty callback is a valid value that does
//! nothing when called; it is what method binding produces when the target
//! object no longer exists.
//!
//! # Method binding
//!
//! [`Callback::method`] lets an object's method be registered as if it were a
//! free function:
//!
//! ```rust,ignore
//! struct Counter { total: i32 }
//!
//! impl Counter {
//!     fn add(&mut self, value: &i32) {
//!         self.total += value;
//!     }
//! }
//!
//! let counter = Rc::new(RefCell::new(Counter { total: 0 }));
//! let callback = Callback::method(&counter, Counter::add);
//! callback.call(&5);
//! assert_eq!(counter.borrow().total, 5);
//! ```
//!
//! The binding holds a [`Weak`] reference: it never keeps the target alive,
//! and calling it after the target is dropped does nothing.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

/// A shareable, possibly empty listener for arguments of type `A`.
pub struct Callback<A: ?Sized> {
    inner: Option<Rc<dyn Fn(&A)>>,
}

impl<A: ?Sized> Callback<A> {
    /// Wrap a closure or function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) + 'static,
    {
        Self {
            inner: Some(Rc::new(f)),
        }
    }

    /// The empty callback.
    pub const fn none() -> Self {
        Self { inner: None }
    }

    /// Returns `true` if there is nothing to call.
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Call the wrapped function. Does nothing when empty.
    pub fn call(&self, args: &A) {
        if let Some(f) = &self.inner {
            f(args);
        }
    }
}

impl<A: ?Sized + 'static> Callback<A> {
    /// Bind `method` to a shared object.
    ///
    /// The object is borrowed mutably for the duration of each call, so a
    /// method must not reach back into its own object through the same
    /// `RefCell`.
    pub fn method<T, M>(target: &Rc<RefCell<T>>, method: M) -> Self
    where
        T: 'static,
        M: Fn(&mut T, &A) + 'static,
    {
        Self::method_weak(Rc::downgrade(target), method)
    }

    /// Bind `method` to an object that may already be gone.
    ///
    /// Returns the empty callback if `target` cannot be upgraded.
    pub fn method_weak<T, M>(target: Weak<RefCell<T>>, method: M) -> Self
    where
        T: 'static,
        M: Fn(&mut T, &A) + 'static,
    {
        if target.strong_count() == 0 {
            return Self::none();
        }
        Self::new(move |args: &A| {
            if let Some(target) = target.upgrade() {
                let mut target = target.borrow_mut();
                method(&mut *target, args);
            }
        })
    }
}

impl<A: ?Sized> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: ?Sized> Default for Callback<A> {
    fn default() -> Self {
        Self::none()
    }
}

impl<A: ?Sized> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("empty", &self.is_empty())
            .finish()
    }
}
