#![allow(dead_code)]

use lazy_static::lazy_static;
use std::{cell::RefCell, rc::Rc, sync::Mutex};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Receives `(int)` callbacks through a method.
#[derive(Debug, Default)]
pub struct TestClass {
    pub last_value: i32,
    pub count: usize,
}

impl TestClass {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn callback(&mut self, value: &i32) {
        self.last_value = *value;
        self.count += 1;
    }
}

/// Receives `(int, double, string)` callbacks.
#[derive(Debug, Default)]
pub struct MultiArgClass {
    pub last_int: i32,
    pub last_double: f64,
    pub last_string: String,
}

impl MultiArgClass {
    pub fn callback(&mut self, (a, b, c): &(i32, f64, String)) {
        self.last_int = *a;
        self.last_double = *b;
        self.last_string = c.clone();
    }
}

/// Receives `()` callbacks.
#[derive(Debug, Default)]
pub struct NoArgClass {
    pub count: usize,
}

impl NoArgClass {
    pub fn callback(&mut self, _: &()) {
        self.count += 1;
    }
}

// ============================================================================
// Free Functions
// ============================================================================

lazy_static! {
    static ref REGISTRY_TOTAL: Mutex<i32> = Mutex::new(0);
    static ref OBSERVER_TOTAL: Mutex<i32> = Mutex::new(0);
}

pub fn add_to_registry_total(value: &i32) {
    *REGISTRY_TOTAL.lock().unwrap() += value;
}

pub fn registry_total() -> i32 {
    *REGISTRY_TOTAL.lock().unwrap()
}

pub fn add_to_observer_total(value: &i32) {
    *OBSERVER_TOTAL.lock().unwrap() += value;
}

pub fn observer_total() -> i32 {
    *OBSERVER_TOTAL.lock().unwrap()
}
