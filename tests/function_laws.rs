//! Property-based tests for function combinator laws.
//!
//! ## Composition Laws
//! - **Left Identity**: `f.compose(identity) == f`
//! - **Right Identity**: `f.and_then(identity) == f`
//! - **Associativity**: `f.and_then(g).and_then(h) == f.and_then(g.and_then(h))`
//!
//! ## Reversal Laws
//! - **Double Reverse Identity**: `f.reversed().reversed() == f`
//!
//! ## Currying Laws
//! - **Equivalence**: `f.curried()(a)(b) == f(a, b)`
//! - **Partial Equivalence**: `f.partial(a)(b) == f(a, b)`

use lambdas::function::{Function1, Function2, Function3, identity};
use proptest::prelude::*;

fn scale(value: i64) -> i64 {
    value.wrapping_mul(7)
}

fn shift(value: i64) -> i64 {
    value.wrapping_add(13)
}

fn mask(value: i64) -> i64 {
    value & 0x0fff
}

fn combine(left: i32, right: i32) -> i64 {
    i64::from(left) * 3 - i64::from(right)
}

fn weave(first: u8, second: i16, third: char) -> String {
    format!("{first}|{second}|{third}")
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_identity(x in any::<i64>()) {
        prop_assert_eq!(scale.compose(identity::<i64>)(x), scale(x));
        prop_assert_eq!(scale.and_then(identity::<i64>)(x), scale(x));
    }

    #[test]
    fn prop_and_then_associative(x in any::<i64>()) {
        let left = scale.and_then(shift).and_then(mask);
        let right = scale.and_then(shift.and_then(mask));

        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_compose_is_flipped_and_then(x in any::<i64>()) {
        prop_assert_eq!(scale.compose(shift)(x), shift.and_then(scale)(x));
    }

    #[test]
    fn prop_binary_compose_with_identities(a in any::<i32>(), b in any::<i32>()) {
        let composed = combine.compose(identity::<i32>, identity::<i32>);

        prop_assert_eq!(composed(a, b), combine(a, b));
    }
}

// =============================================================================
// Reversal Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_double_reverse_is_identity(a in any::<i32>(), b in any::<i32>()) {
        let twice = combine.reversed().reversed();

        prop_assert_eq!(twice(a, b), combine(a, b));
    }

    #[test]
    fn prop_reverse_swaps(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(combine.reversed()(b, a), combine(a, b));
    }

    #[test]
    fn prop_ternary_double_reverse_is_identity(a in any::<u8>(), b in any::<i16>(), c in any::<char>()) {
        prop_assert_eq!(weave.reversed().reversed()(a, b, c), weave(a, b, c));
    }
}

// =============================================================================
// Currying Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_binary_curried_equivalence(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(combine.curried()(a)(b), combine(a, b));
        prop_assert_eq!(combine.partial(a)(b), combine(a, b));
    }

    #[test]
    fn prop_ternary_curried_equivalence(a in any::<u8>(), b in any::<i16>(), c in any::<char>()) {
        prop_assert_eq!(weave.curried()(a)(b)(c), weave(a, b, c));
        prop_assert_eq!(weave.partial(a)(b, c), weave(a, b, c));
    }

    #[test]
    fn prop_boxed_equivalence(a in any::<u8>(), b in any::<i16>(), c in any::<char>()) {
        let boxed = weave.boxed();

        prop_assert_eq!(boxed(a, b, c), weave(a, b, c));
        prop_assert_eq!(boxed.apply(a, b, c), weave(a, b, c));
    }
}
