//! Property-based tests for the Semigroup, Monoid and Ord laws.
//!
//! - Associativity: `combine(combine(a, b), c) == combine(a, combine(b, c))`
//! - Identity: `combine(empty(), a) == a == combine(a, empty())`
//! - Antisymmetry: `compare(x, y) == compare(y, x).reverse()`

use dogs::algebra::{
    Monoid, MonoidFn, Semigroup, SemigroupFn, derive_additive_monoid,
    derive_multiplicative_monoid,
};
use dogs::cmp::{Eq as _, Ord as _, derive_eq, derive_ord};
use dogs::types::option;
use dogs::types::pair::{self, Pair};
use proptest::prelude::*;

fn assert_monoid_laws<T, M>(monoid: &M, a: T, b: T, c: T) -> Result<(), TestCaseError>
where
    T: Clone + PartialEq + std::fmt::Debug,
    M: Monoid<T>,
{
    let left = monoid.combine(monoid.combine(a.clone(), b.clone()), c.clone());
    let right = monoid.combine(a.clone(), monoid.combine(b, c));
    prop_assert_eq!(left, right);
    prop_assert_eq!(monoid.combine(monoid.empty(), a.clone()), a.clone());
    prop_assert_eq!(monoid.combine(a.clone(), monoid.empty()), a);
    Ok(())
}

proptest! {
    #[test]
    fn prop_additive_i32_is_a_monoid(a in -10_000..10_000_i32, b in -10_000..10_000_i32, c in -10_000..10_000_i32) {
        assert_monoid_laws(&derive_additive_monoid::<i32>(), a, b, c)?;
    }

    #[test]
    fn prop_multiplicative_i64_is_a_monoid(a in -1000..1000_i64, b in -1000..1000_i64, c in -1000..1000_i64) {
        assert_monoid_laws(&derive_multiplicative_monoid::<i64>(), a, b, c)?;
    }

    #[test]
    fn prop_string_concatenation_is_a_monoid(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        assert_monoid_laws(&derive_additive_monoid::<String>(), a, b, c)?;
    }

    #[test]
    fn prop_option_monoid_laws(
        a in proptest::option::of(".{0,4}"),
        b in proptest::option::of(".{0,4}"),
        c in proptest::option::of(".{0,4}"),
    ) {
        let monoid = option::derive_monoid(derive_additive_monoid::<String>());
        assert_monoid_laws(&monoid, a, b, c)?;
    }

    #[test]
    fn prop_pair_monoid_laws(a in (-100..100_i32, ".{0,4}"), b in (-100..100_i32, ".{0,4}"), c in (-100..100_i32, ".{0,4}")) {
        let monoid = pair::derive_monoid(
            derive_additive_monoid::<i32>(),
            derive_additive_monoid::<String>(),
        );
        assert_monoid_laws(&monoid, Pair::from(a), Pair::from(b), Pair::from(c))?;
    }

    #[test]
    fn prop_closure_monoid_laws(a: u8, b: u8, c: u8) {
        let max = MonoidFn::new(SemigroupFn::new(|x: u8, y: u8| x.max(y)), || u8::MIN);
        assert_monoid_laws(&max, a, b, c)?;
    }

    #[test]
    fn prop_combine_n_matches_repeated_combine(value in -100..100_i32, count in 1..10_usize) {
        let monoid = derive_additive_monoid::<i32>();
        let expected = (1..count).fold(value, |acc, _| monoid.combine(acc, value));
        prop_assert_eq!(monoid.combine_n(value, count), expected);
    }

    #[test]
    fn prop_pair_order_is_antisymmetric_and_lexicographic(x: (i16, i16), y: (i16, i16)) {
        let ord = pair::derive_ord(derive_ord::<i16>(), derive_ord::<i16>());
        let (x, y) = (Pair::from(x), Pair::from(y));
        prop_assert_eq!(ord.compare(&x, &y), ord.compare(&y, &x).reverse());
        prop_assert_eq!(std::cmp::Ordering::from(ord.compare(&x, &y)), x.cmp(&y));
    }

    #[test]
    fn prop_option_order_matches_std(x: Option<i8>, y: Option<i8>) {
        let ord = option::derive_ord(derive_ord::<i8>());
        prop_assert_eq!(std::cmp::Ordering::from(ord.compare(&x, &y)), x.cmp(&y));
    }

    #[test]
    fn prop_derived_eq_is_reflexive_and_symmetric(x: (u8, u8), y: (u8, u8)) {
        let eq = pair::derive_eq(derive_eq::<u8>(), derive_eq::<u8>());
        let (x, y) = (Pair::from(x), Pair::from(y));
        prop_assert!(eq.equal(&x, &x));
        prop_assert_eq!(eq.equal(&x, &y), eq.equal(&y, &x));
        prop_assert_eq!(eq.equal(&x, &y), x == y);
    }
}
