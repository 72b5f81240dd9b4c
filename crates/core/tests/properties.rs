//! Property tests for the container's observable invariants.

use expected_core::{BadExpectedAccess, Expected, Unexpected};
use expected_testkit::CallCounter;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn any_expected() -> impl Strategy<Value = Expected<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Expected::<i32, String>::new),
        "[a-z]{0,12}".prop_map(Expected::<i32, String>::from_error),
    ]
}

proptest! {
    #[test]
    fn value_holder_reports_its_value(value in any::<i32>()) {
        let held: Expected<i32, String> = Expected::new(value);
        let checked = held
            .value()
            .map_err(|_| TestCaseError::fail("value holder denied checked access"))?;

        prop_assert!(held.has_value());
        prop_assert_eq!(*held, *checked);
        prop_assert_eq!(held.as_value(), Some(&value));
    }

    #[test]
    fn error_holder_denies_checked_access(error in "[a-z]{0,12}") {
        let failed: Expected<i32, String> = Expected::from_error(error.clone());

        prop_assert!(!failed.has_value());
        prop_assert_eq!(failed.value(), Err(BadExpectedAccess::new(error.clone())));
        prop_assert_eq!(&failed, &Unexpected::new(error));
    }

    #[test]
    fn value_or_picks_the_held_value(expected in any_expected(), fallback in any::<i32>()) {
        let picked = expected.value_or(fallback);
        match expected.as_value() {
            Some(value) => {
                prop_assert_eq!(picked, *value);
            }
            None => {
                prop_assert_eq!(picked, fallback);
            }
        }
    }

    #[test]
    fn clone_is_equal_to_its_source(expected in any_expected()) {
        let copy = expected.clone();
        prop_assert_eq!(&copy, &expected);
        prop_assert_eq!(copy.has_value(), expected.has_value());
    }

    #[test]
    fn clone_from_matches_the_source(target in any_expected(), source in any_expected()) {
        let mut target = target;
        prop_assert!(target.has_value() || target.has_error());

        target.clone_from(&source);
        prop_assert_eq!(&target, &source);

        let snapshot = target.clone();
        target.clone_from(&snapshot);
        prop_assert_eq!(&target, &source);
    }

    #[test]
    fn combinators_only_run_on_their_branch(expected in any_expected()) {
        let mapped = CallCounter::default();
        let recovered = CallCounter::default();

        let _ = expected.map_ref(|_| mapped.hit());
        let _ = expected.or_else_ref(|_| {
            recovered.hit();
            Expected::<i32, String>::new(0)
        });

        prop_assert_eq!(mapped.count(), usize::from(expected.has_value()));
        prop_assert_eq!(recovered.count(), usize::from(expected.has_error()));
    }

    #[test]
    fn and_then_with_new_is_identity(expected in any_expected()) {
        let chained = expected.clone().and_then(Expected::new);
        prop_assert_eq!(chained, expected);
    }

    #[test]
    fn swap_exchanges_states(left in any_expected(), right in any_expected()) {
        let (mut a, mut b) = (left.clone(), right.clone());
        a.swap(&mut b);

        prop_assert_eq!(a, right);
        prop_assert_eq!(b, left);
    }

    #[test]
    fn result_round_trip_preserves_state(expected in any_expected()) {
        let result: Result<i32, String> = expected.clone().into();
        prop_assert_eq!(Expected::from(result), expected);
    }
}

#[test]
fn doubling_scenarios() {
    let answer: Expected<i32, i32> = Expected::new(42);
    let seventeen: Expected<i32, i32> = Expected::new(17);
    assert_eq!(*answer, 42);
    assert_eq!(*seventeen, 17);

    let failed: Expected<i32, i32> = Expected::unexpect(21);
    let mapped = failed.map(|x| x * 2);
    assert!(!mapped.has_value());
    assert_eq!(*mapped.error(), 21);
}
