//! Property-based tests for the Outcome<T> algebra.
//!
//! Outcomes are single-owner values (faults are not cloneable), so each law
//! builds its operands independently from a shared seed: `Ok(n)` becomes a
//! success, `Err(message)` becomes a failure. Failure equality compares
//! message and kind, which independently built failures share.

use fallible::value::Outcome;
use proptest::prelude::*;

fn outcome_of(seed: &Result<i32, String>) -> Outcome<i32> {
    match seed {
        Ok(value) => Outcome::ok(*value),
        Err(message) => Outcome::err_message(message.clone()),
    }
}

fn half_if_even(n: i32) -> Outcome<i32> {
    if n % 2 == 0 {
        Outcome::ok(n / 2)
    } else {
        Outcome::err_message("odd value")
    }
}

fn describe_if_positive(n: i32) -> Outcome<String> {
    if n > 0 {
        Outcome::ok(format!("positive {n}"))
    } else {
        Outcome::err_message("not positive")
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity(seed in prop::result::maybe_ok(any::<i32>(), ".{0,12}")) {
        prop_assert_eq!(outcome_of(&seed).map(|x| x), outcome_of(&seed));
    }

    #[test]
    fn prop_functor_composition(seed in prop::result::maybe_ok(any::<i32>(), ".{0,12}")) {
        let first = |n: i32| n.wrapping_add(1);
        let second = |n: i32| n.wrapping_mul(2);

        let left = outcome_of(&seed).map(first).map(second);
        let right = outcome_of(&seed).map(|x| second(first(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            Outcome::ok(value).flat_map(half_if_even),
            half_if_even(value)
        );
    }

    #[test]
    fn prop_right_identity(seed in prop::result::maybe_ok(any::<i32>(), ".{0,12}")) {
        prop_assert_eq!(outcome_of(&seed).flat_map(Outcome::ok), outcome_of(&seed));
    }

    #[test]
    fn prop_associativity(seed in prop::result::maybe_ok(any::<i32>(), ".{0,12}")) {
        let left = outcome_of(&seed)
            .flat_map(half_if_even)
            .flat_map(describe_if_positive);
        let right = outcome_of(&seed)
            .flat_map(|x| half_if_even(x).flat_map(describe_if_positive));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Propagation Properties
// =============================================================================

proptest! {
    /// A failure passes through `map` with its message intact.
    #[test]
    fn prop_failure_survives_map_unchanged(message in ".{1,24}") {
        let failed: Outcome<i32> = Outcome::err_message(message.clone());
        let mapped = failed.map(|n| n + 1);
        let fault = mapped.fault();
        prop_assert_eq!(fault.message(), message.as_str());
    }

    /// The comprehension form agrees with its desugaring.
    #[test]
    fn prop_flat_map_with_desugaring(seed in prop::result::maybe_ok(any::<i32>(), ".{0,12}")) {
        let sugar = outcome_of(&seed)
            .flat_map_with(half_if_even, |x, y| x.wrapping_add(y));
        let desugared = outcome_of(&seed)
            .flat_map(|x| half_if_even(x).map(|y| x.wrapping_add(y)));
        prop_assert_eq!(sugar, desugared);
    }
}
