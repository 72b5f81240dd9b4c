//! Emplacement replaces whichever payload is live with a new value.

use expected_core::{Expected, Unexpected};
use expected_testkit::{Ledger, TakesSequenceAndArgs, Tracked, init_test_tracing};

#[test]
fn emplace_boxed_value() {
    let mut expected: Expected<Box<i32>, i32> = Expected::default();
    expected.emplace(Box::new(42));
    assert!(expected.has_value());
    assert_eq!(**expected, 42);
}

#[test]
fn emplace_sequence() {
    let mut expected: Expected<Vec<i32>, i32> = Expected::default();
    expected.emplace([0, 1]);
    assert!(expected.has_value());
    assert_eq!(expected[0], 0);
    assert_eq!(expected[1], 1);
}

#[test]
fn emplace_argument_list() {
    let mut expected: Expected<(i32, i32), i32> = Expected::default();
    expected.emplace((2, 3));
    assert!(expected.has_value());
    assert_eq!(expected.0, 2);
    assert_eq!(expected.1, 3);
}

#[test]
fn emplace_over_error_with_sequence_and_arguments() {
    init_test_tracing();
    let mut expected: Expected<TakesSequenceAndArgs, i32> = Unexpected::new(0).into();
    expected.emplace(([0, 1], 2, 3));

    assert!(expected.has_value());
    assert_eq!(expected.values, vec![0, 1]);
    assert_eq!(expected.pair, (2, 3));
}

#[test]
fn emplace_returns_the_new_value() {
    let mut expected: Expected<String, i32> = Expected::from_error(1);
    expected.emplace("abc").push('d');
    assert_eq!(expected.as_str(), "abcd");

    let stored = expected.emplace_with(|| "xyz".to_string());
    stored.make_ascii_uppercase();
    assert_eq!(expected.as_str(), "XYZ");
}

#[test]
fn emplace_releases_previous_payload_exactly_once() {
    let ledger = Ledger::default();
    let mut expected: Expected<Tracked<i32>, Tracked<i32>> =
        Expected::from_error(Tracked::new(1, &ledger));

    expected.emplace_with(|| Tracked::new(2, &ledger));
    assert_eq!(ledger.drops(), 1);
    assert_eq!(expected.value, 2);

    expected.emplace_with(|| Tracked::new(3, &ledger));
    assert_eq!(ledger.drops(), 2);
    assert_eq!(expected.value, 3);
}
