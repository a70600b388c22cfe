//! Property-based tests for the limb-chain arithmetic and the driver.
//!
//! `num-bigint` serves as the oracle throughout.

use num_bigint::BigUint;
use proptest::prelude::*;

use fibdrv_core::arith::{add, double_inplace, mul, sub};
use fibdrv_core::reference::reference_fibonacci;
use fibdrv_core::{fibonacci, LimbChain, BOUND};

fn to_big(chain: &LimbChain) -> BigUint {
    BigUint::parse_bytes(chain.to_decimal_string().unwrap().as_bytes(), 10).unwrap()
}

fn zero() -> LimbChain {
    LimbChain::new(0).unwrap()
}

/// Limb vectors biased towards the edges of the limb range.
fn limbs() -> impl Strategy<Value = Vec<u64>> {
    let limb = prop_oneof![
        Just(0u64),
        Just(1u64),
        Just(BOUND - 1),
        Just(BOUND / 2),
        0..BOUND,
    ];
    prop::collection::vec(limb, 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_matches_biguint(a in limbs(), b in limbs()) {
        let a = LimbChain::from_limbs(&a).unwrap();
        let b = LimbChain::from_limbs(&b).unwrap();
        let (larger, smaller) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
        let mut r = zero();
        add(larger, smaller, &mut r).unwrap();
        prop_assert_eq!(to_big(&r), to_big(&a) + to_big(&b));
    }

    #[test]
    fn sub_matches_biguint(a in limbs(), b in limbs()) {
        let a = LimbChain::from_limbs(&a).unwrap();
        let b = LimbChain::from_limbs(&b).unwrap();
        let (big_a, big_b) = (to_big(&a), to_big(&b));
        let (larger, smaller) = if big_a >= big_b { (&a, &b) } else { (&b, &a) };
        let mut r = zero();
        sub(larger, smaller, &mut r).unwrap();
        let expected = if big_a >= big_b { big_a - big_b } else { big_b - big_a };
        prop_assert_eq!(to_big(&r), expected);
        prop_assert!(r.len() == 1 || *r.limbs().last().unwrap() != 0);
    }

    #[test]
    fn mul_matches_biguint(a in limbs(), b in limbs()) {
        let a = LimbChain::from_limbs(&a).unwrap();
        let b = LimbChain::from_limbs(&b).unwrap();
        let mut r = zero();
        mul(&a, &b, &mut r).unwrap();
        prop_assert_eq!(to_big(&r), to_big(&a) * to_big(&b));
        prop_assert!(r.len() == 1 || *r.limbs().last().unwrap() != 0);
    }

    #[test]
    fn double_twice_is_times_four(a in limbs()) {
        let a = LimbChain::from_limbs(&a).unwrap();
        let mut d = a.clone();
        double_inplace(&mut d).unwrap();
        double_inplace(&mut d).unwrap();
        let mut m = zero();
        mul(&a, &LimbChain::new(4).unwrap(), &mut m).unwrap();
        prop_assert_eq!(d, m);
    }

    #[test]
    fn swap_is_an_involution(a in limbs(), b in limbs()) {
        let mut a = LimbChain::from_limbs(&a).unwrap();
        let mut b = LimbChain::from_limbs(&b).unwrap();
        let (orig_a, orig_b) = (a.clone(), b.clone());
        a.swap(&mut b);
        prop_assert_eq!(&a, &orig_b);
        a.swap(&mut b);
        prop_assert_eq!(a, orig_a);
        prop_assert_eq!(b, orig_b);
    }

    /// For random n, the limb driver agrees with the reference.
    #[test]
    fn driver_matches_reference(n in 0u64..3000) {
        prop_assert_eq!(fibonacci(n).unwrap(), reference_fibonacci(n).to_string());
    }

    /// F(n) + F(n+1) == F(n+2) for random n.
    #[test]
    fn fibonacci_addition_property(n in 0u64..2000) {
        let parse = |s: String| BigUint::parse_bytes(s.as_bytes(), 10).unwrap();
        let fn0 = parse(fibonacci(n).unwrap());
        let fn1 = parse(fibonacci(n + 1).unwrap());
        let fn2 = parse(fibonacci(n + 2).unwrap());
        prop_assert_eq!(fn0 + fn1, fn2, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }
}
