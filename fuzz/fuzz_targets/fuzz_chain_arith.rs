#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibdrv_core::arith::{add, double_inplace, mul, sub};
use fibdrv_core::chain::LimbChain;
use fibdrv_core::BOUND;

fn limbs_from(bytes: &[u8]) -> Vec<u64> {
    bytes
        .chunks(8)
        .map(|c| {
            let mut word = [0u8; 8];
            word[..c.len()].copy_from_slice(c);
            u64::from_le_bytes(word) % BOUND
        })
        .collect()
}

fn to_big(chain: &LimbChain) -> BigUint {
    chain.to_decimal_string().unwrap().parse().unwrap()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Cap operands at 32 limbs each
    let rest = &data[1..];
    let split = usize::from(data[0]).min(rest.len());
    let (left, right) = rest.split_at(split);
    let a = LimbChain::from_limbs(&limbs_from(&left[..left.len().min(256)])).unwrap();
    let b = LimbChain::from_limbs(&limbs_from(&right[..right.len().min(256)])).unwrap();
    let (big_a, big_b) = (to_big(&a), to_big(&b));

    let (larger, smaller, big_larger, big_smaller) = if big_a >= big_b {
        (&a, &b, &big_a, &big_b)
    } else {
        (&b, &a, &big_b, &big_a)
    };

    let mut sum = LimbChain::new(0).unwrap();
    add(larger, smaller, &mut sum).unwrap();
    assert_eq!(to_big(&sum), big_larger + big_smaller);

    let mut diff = LimbChain::new(0).unwrap();
    sub(larger, smaller, &mut diff).unwrap();
    assert_eq!(to_big(&diff), big_larger - big_smaller);

    let mut product = LimbChain::new(0).unwrap();
    mul(larger, smaller, &mut product).unwrap();
    assert_eq!(to_big(&product), big_larger * big_smaller);

    let mut doubled = larger.clone();
    double_inplace(&mut doubled).unwrap();
    assert_eq!(to_big(&doubled), big_larger * 2u32);
});
