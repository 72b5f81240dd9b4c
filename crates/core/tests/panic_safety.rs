//! A panic from a payload operation leaves the container in its prior state.

use expected_core::Expected;
use expected_testkit::{CloneGate, PanicOnClone, failing_constructor, init_test_tracing};
use std::panic::{AssertUnwindSafe, catch_unwind};

type Refuses = CloneGate<true>;

#[test]
fn moves_never_panic_even_when_clone_does() {
    let mut e1: Expected<Refuses, i32> = Expected::in_place("1");
    let e2: Expected<Refuses, i32> = Expected::in_place("2");
    let mut e3: Expected<Refuses, i32> = Expected::from_error(3);
    assert_eq!(e1.text(), "1");
    assert_eq!(*e3.error(), 3);

    e1 = e2;
    assert!(e1.has_value());
    assert_eq!(e1.text(), "2");

    e3 = e1;
    assert!(e3.has_value());
    assert_eq!(e3.text(), "2");
}

#[test]
fn failed_copy_between_values_keeps_the_destination() {
    init_test_tracing();
    let mut e1: Expected<Refuses, i32> = Expected::in_place("1");
    let e2: Expected<Refuses, i32> = Expected::in_place("2");

    let outcome = catch_unwind(AssertUnwindSafe(|| e1.clone_from(&e2)));

    assert!(outcome.is_err());
    assert!(e1.has_value());
    assert_eq!(e1.text(), "1");
    assert_eq!(e2.text(), "2");
}

#[test]
fn failed_copy_across_kinds_keeps_the_destination() {
    init_test_tracing();
    let e2: Expected<Refuses, i32> = Expected::in_place("2");
    let mut e3: Expected<Refuses, i32> = Expected::from_error(3);

    let outcome = catch_unwind(AssertUnwindSafe(|| e3.clone_from(&e2)));

    assert!(outcome.is_err());
    assert!(!e3.has_value());
    assert_eq!(*e3.error(), 3);
    assert_eq!(e2.text(), "2");
}

#[test]
fn failed_error_copy_keeps_the_value() {
    let mut ready: Expected<i32, PanicOnClone> = Expected::new(7);
    let failed: Expected<i32, PanicOnClone> = Expected::from_error(PanicOnClone::new(1));

    let outcome = catch_unwind(AssertUnwindSafe(|| ready.clone_from(&failed)));

    assert!(outcome.is_err());
    assert_eq!(*ready, 7);
}

#[test]
fn panicking_emplace_keeps_the_previous_payload() {
    let mut failed: Expected<String, i32> = Expected::from_error(9);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        failed.emplace_with(|| failing_constructor("constructor failed"));
    }));

    assert!(outcome.is_err());
    assert!(!failed.has_value());
    assert_eq!(*failed.error(), 9);

    let mut ready: Expected<String, i32> = Expected::new("kept".to_string());
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        ready.emplace_with(|| failing_constructor("constructor failed"));
    }));

    assert!(outcome.is_err());
    assert_eq!(ready.as_str(), "kept");
}

#[test]
fn panicking_combinator_closure_propagates_and_leaves_source() {
    let ready: Expected<i32, String> = Expected::new(1);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        ready.map_ref(|_| -> i32 { failing_constructor("mapper failed") })
    }));

    assert!(outcome.is_err());
    assert_eq!(*ready, 1);
}

#[test]
fn panicking_checked_clone_leaves_the_container() {
    let failed: Expected<i32, PanicOnClone> = Expected::from_error(PanicOnClone::new(4));

    let outcome = catch_unwind(AssertUnwindSafe(|| failed.value().is_ok()));

    assert!(outcome.is_err());
    assert_eq!(failed.error().id, 4);
}
