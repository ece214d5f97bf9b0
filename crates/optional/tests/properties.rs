//! Property-based tests for `Optional`
//!
//! These use proptest to check the algebraic laws of the container across a
//! wide range of values.

use optio_optional::{flat_map, map, BoxError, ErrorKind, Function, Optional, Predicate, Supplier};
use proptest::prelude::*;

fn halve_even(x: i64) -> Optional<i64> {
    if x % 2 == 0 {
        Optional::new(x / 2)
    } else {
        Optional::empty()
    }
}

fn shrink_unless_multiple_of_three(x: i64) -> Optional<i64> {
    if x % 3 == 0 {
        Optional::empty()
    } else {
        Optional::new(x.wrapping_sub(1))
    }
}

/// Generate optionals in either state
fn arb_optional() -> impl Strategy<Value = Optional<i64>> {
    prop_oneof![
        any::<i64>().prop_map(Optional::new),
        Just(Optional::empty()),
    ]
}

proptest! {
    /// Property: a wrapped plain value is present and comes back unchanged
    #[test]
    fn property_new_then_get_returns_value(value in any::<i64>()) {
        let optional = Optional::new(value);
        prop_assert!(optional.is_present());
        prop_assert_eq!(optional.get().ok(), Some(&value));
        prop_assert!(optional.error().is_none());
    }

    /// Property: wrapping an `Option` is absent exactly for `None`
    #[test]
    fn property_option_nil_is_absent(value in proptest::option::of(any::<i32>())) {
        let optional = Optional::new(value);
        prop_assert_eq!(optional.is_empty(), value.is_none());
        if value.is_none() {
            prop_assert!(optional.error().is_some_and(|e| e.is(ErrorKind::Empty)));
        }
    }

    /// Property: mapping a present value equals wrapping the mapped value
    #[test]
    fn property_map_applies_function(value in any::<i64>(), factor in any::<i64>()) {
        let scale = Function::infallible(move |x: i64| x.wrapping_mul(factor));
        let mapped = map(Optional::new(value), scale);
        prop_assert_eq!(mapped, Optional::new(value.wrapping_mul(factor)));
    }

    /// Property: mapping an absent optional keeps its cause
    #[test]
    fn property_map_keeps_absent_cause(factor in any::<i64>()) {
        let scale = Function::infallible(move |x: i64| x.wrapping_mul(factor));
        let mapped = map(Optional::<i64>::empty(), scale);
        let error = mapped.into_error();
        prop_assert!(error.is_some_and(|e| e.kinds() == vec![ErrorKind::Empty]));
    }

    /// Property: flat_map is associative for non-failing functions
    #[test]
    fn property_flat_map_is_associative(optional in arb_optional()) {
        let left = flat_map(
            flat_map(optional.clone(), Function::infallible(halve_even)),
            Function::infallible(shrink_unless_multiple_of_three),
        );
        let right = flat_map(
            optional,
            Function::infallible(|x: i64| {
                flat_map(halve_even(x), Function::infallible(shrink_unless_multiple_of_three))
            }),
        );
        prop_assert_eq!(left, right);
    }

    /// Property: filtering with a predicate that holds is the identity
    #[test]
    fn property_filter_identity(optional in arb_optional()) {
        let filtered = optional.clone().filter(Predicate::infallible(|_: &i64| true));
        prop_assert_eq!(filtered.is_present(), optional.is_present());
        prop_assert_eq!(filtered, optional);
    }

    /// Property: filtering keeps a value exactly when the predicate holds
    #[test]
    fn property_filter_matches_predicate(value in any::<i64>()) {
        let filtered = Optional::new(value).filter(Predicate::infallible(|x: &i64| x % 2 == 0));
        if value % 2 == 0 {
            prop_assert_eq!(filtered.get().ok(), Some(&value));
        } else {
            let kind = filtered.error().and_then(|e| e.as_kind());
            prop_assert_eq!(kind, Some(ErrorKind::PredicateFailed));
        }
    }

    /// Property: every failing fallback adds one SupplierErr to the cause
    #[test]
    fn property_failing_or_accumulates_causes(attempts in 1_usize..16) {
        let mut optional = Optional::<i64>::empty();
        for attempt in 0..attempts {
            optional = optional.or(Supplier::new(move || -> Result<Optional<i64>, BoxError> {
                Err(format!("attempt {attempt} failed").into())
            }));
        }

        let kinds = optional.into_error().map(|e| e.kinds()).unwrap_or_default();
        let supplier_errors = kinds.iter().filter(|kind| **kind == ErrorKind::SupplierErr).count();
        prop_assert_eq!(supplier_errors, attempts);
        prop_assert_eq!(kinds.last(), Some(&ErrorKind::Empty));
        prop_assert_eq!(kinds.len(), attempts + 1);
    }

    /// Property: a present optional never calls a set fallback
    #[test]
    fn property_or_short_circuits_when_present(value in any::<i64>()) {
        let mut calls = 0;
        let result = Optional::new(value).or(Supplier::infallible(|| {
            calls += 1;
            Optional::new(0)
        }));
        prop_assert_eq!(result.into_option(), Some(value));
        prop_assert_eq!(calls, 0);
    }
}
