//! Named callback registry tests using the public API.

use std::{
    cell::RefCell,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};
use tidings::{CallbackRegistry, RegistryError, TidingsError, testing::Recorder};

mod common;
use common::{TestClass, add_to_registry_total, registry_total};

#[test]
fn test_callback_registration_and_invocation() {
    let instance = TestClass::shared();
    let target = instance.clone();
    let mut registry = CallbackRegistry::<i32>::new();
    registry
        .register("TestClass::callback", move |value| {
            target.borrow_mut().callback(value)
        })
        .unwrap();

    registry.invoke(&123);

    assert_eq!(
        instance.borrow().last_value,
        123,
        "Callback should receive the invoked value"
    );
}

#[test]
fn test_callback_free_function() {
    let mut registry = CallbackRegistry::<i32>::new();
    registry
        .register("TestFreeFunction", add_to_registry_total)
        .unwrap();

    registry.invoke(&123);

    assert_eq!(registry_total(), 123, "Free function should be called");
}

#[test]
fn test_callback_lambda_function() {
    let total = Rc::new(RefCell::new(0_i32));
    let sink = total.clone();
    let mut registry = CallbackRegistry::<i32>::new();
    registry
        .register("LambdaFunction", move |value| *sink.borrow_mut() += value)
        .unwrap();

    registry.invoke(&123);

    assert_eq!(*total.borrow(), 123, "Lambda should be called");
}

#[test]
fn test_callback_method() {
    let instance = TestClass::shared();
    let mut registry = CallbackRegistry::<i32>::new();
    registry
        .register_method("TestClass::callback", &instance, TestClass::callback)
        .unwrap();

    registry.invoke(&42);

    let instance = instance.borrow();
    assert_eq!(instance.last_value, 42);
    assert_eq!(instance.count, 1);
}

#[test]
fn test_callback_unregistration() {
    let instance = TestClass::shared();
    let mut registry = CallbackRegistry::<i32>::new();
    registry
        .register_method("TestClass::callback", &instance, TestClass::callback)
        .unwrap();

    let unregistered = registry.unregister("TestClass::callback");
    registry.invoke(&456);

    assert!(unregistered, "Unregister should report the removal");
    assert_eq!(
        instance.borrow().count,
        0,
        "Callback should not run after unregistration"
    );
}

#[test]
fn test_multiple_callbacks() {
    let instance1 = TestClass::shared();
    let instance2 = TestClass::shared();
    let mut registry = CallbackRegistry::<i32>::new();
    registry
        .register_method("Instance1::callback", &instance1, TestClass::callback)
        .unwrap();
    registry
        .register_method("Instance2::callback", &instance2, TestClass::callback)
        .unwrap();

    registry.invoke(&789);

    assert_eq!(instance1.borrow().last_value, 789);
    assert_eq!(instance2.borrow().last_value, 789);
}

#[test]
fn test_each_callback_called_once_per_invoke() {
    let recorder = Recorder::new();
    let mut registry = CallbackRegistry::<i32>::new();
    registry.register("audit", recorder.callback()).unwrap();

    registry.invoke(&1);
    registry.invoke(&2);
    registry.invoke(&3);

    assert_eq!(recorder.calls(), vec![1, 2, 3]);
}

#[test]
fn test_toggling_never_changes_registration() {
    let recorder = Recorder::new();
    let mut registry = CallbackRegistry::<i32>::new();
    registry.register("audit", recorder.callback()).unwrap();

    for _ in 0..3 {
        registry.set_enabled("audit", false).unwrap();
        registry.set_enabled("audit", true).unwrap();
    }
    registry.set_enabled("audit", false).unwrap();
    registry.invoke(&1);

    assert_eq!(registry.len(), 1);
    assert!(recorder.calls().is_empty());

    registry.set_enabled("audit", true).unwrap();
    registry.invoke(&2);
    assert_eq!(recorder.calls(), vec![2]);
}

#[test]
fn test_contract_violations_are_typed_errors() -> Result<(), TidingsError> {
    let mut registry = CallbackRegistry::<i32>::new();
    registry.register("a", |_| {})?;

    let duplicate: TidingsError = registry.register("a", |_| {}).unwrap_err().into();
    assert!(matches!(
        duplicate,
        TidingsError::Registry(RegistryError::DuplicateIdentifier(_))
    ));

    let unknown = registry.set_enabled("b", true).unwrap_err();
    assert_eq!(unknown.identifier(), "b");

    // Absence on unregister is not an error.
    assert!(!registry.unregister("b"));
    Ok(())
}

#[test]
fn test_invoke_on_empty_registry() {
    let registry: CallbackRegistry<i32> = CallbackRegistry::default();
    registry.invoke(&1);
    assert!(registry.is_empty());
}

#[test]
fn test_builder_assembles_registry() {
    let recorder = Recorder::new();
    let registry = CallbackRegistry::<i32>::builder()
        .label("game.input")
        .register("enabled", recorder.callback())
        .register_disabled("muted", recorder.callback_with(|v: &i32| -v))
        .build()
        .unwrap();

    registry.invoke(&4);

    assert_eq!(recorder.calls(), vec![4]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_panicking_callback_propagates_and_aborts_round() {
    let recorder = Recorder::<&'static str>::new();
    let mut registry = CallbackRegistry::<i32>::new();
    for name in ["a", "b", "c", "d"] {
        registry
            .register(name, recorder.callback_with(move |_: &i32| name))
            .unwrap();
    }
    let log = recorder.callback_with(|_: &i32| "failing");
    registry
        .register("failing", move |value| {
            log(value);
            panic!("listener failed");
        })
        .unwrap();

    let result = panic::catch_unwind(AssertUnwindSafe(|| registry.invoke(&1)));

    assert!(result.is_err(), "Panic should reach the caller of invoke");
    assert_eq!(
        recorder.last(),
        Some("failing"),
        "No callback should run after the panicking one"
    );

    // The registry stays usable once the failing entry is gone.
    assert!(registry.unregister("failing"));
    recorder.clear();
    registry.invoke(&2);

    let mut calls = recorder.calls();
    calls.sort_unstable();
    assert_eq!(calls, vec!["a", "b", "c", "d"]);
}
