//! Testing utilities for Tidings.
//!
//! This module provides small helpers that hand out callbacks and remember
//! what they were called with.
//!
//! # Features
//!
//! - [`Recorder`]: A callback source that records every argument it receives
//! - [`CallCounter`]: A callback source that only counts calls
//!
//! Both are cheap to clone; clones share the same record.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

// ============================================================================
// Recorder
// ============================================================================

/// Records the arguments passed to its callbacks.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = Recorder::new();
/// let mut registry = CallbackRegistry::<i32>::new();
/// registry.register("audit", recorder.callback())?;
///
/// registry.invoke(&5);
/// assert_eq!(recorder.calls(), vec![5]);
/// ```
pub struct Recorder<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> Recorder<T> {
    /// Create a recorder with no calls.
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A callback that records a converted copy of its argument.
    ///
    /// Use this for payloads that are not `Clone`, or are unsized like `str`.
    pub fn callback_with<A, F>(&self, convert: F) -> impl Fn(&A) + use<T, A, F>
    where
        A: ?Sized,
        F: Fn(&A) -> T,
    {
        let calls = self.calls.clone();
        move |args: &A| calls.borrow_mut().push(convert(args))
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl<T: Clone> Recorder<T> {
    /// A callback that records a clone of its argument.
    pub fn callback(&self) -> impl Fn(&T) + use<T> {
        let calls = self.calls.clone();
        move |args: &T| calls.borrow_mut().push(args.clone())
    }

    /// Get a clone of the recorded calls, oldest first.
    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    /// The most recent call, if any.
    pub fn last(&self) -> Option<T> {
        self.calls.borrow().last().cloned()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

// ============================================================================
// Call Counter
// ============================================================================

/// Counts calls to its callbacks, whatever the signature.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CallCounter::new();
/// let observer = observable.create_observer(counter.callback());
///
/// observable.broadcast(&());
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct CallCounter {
    count: Rc<Cell<usize>>,
}

impl CallCounter {
    /// Create a new counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that increments this counter.
    pub fn callback<A: ?Sized>(&self) -> impl Fn(&A) + use<A> {
        let count = self.count.clone();
        move |_: &A| count.set(count.get() + 1)
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }
}
