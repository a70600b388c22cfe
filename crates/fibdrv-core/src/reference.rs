//! Reference Fast Doubling on `num-bigint`, used to cross-validate the
//! limb-chain driver.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::Calculator;
use crate::error::FibError;
use crate::options::Options;

/// Compute F(n) as a `BigUint`.
#[must_use]
pub fn reference_fibonacci(n: u64) -> BigUint {
    let num_bits = 64 - n.leading_zeros();
    let mut fk = BigUint::zero();
    let mut fk1 = BigUint::one();

    for i in (0..num_bits).rev() {
        // F(2k) = F(k) * (2*F(k+1) - F(k)), F(2k+1) = F(k+1)^2 + F(k)^2
        let t = (&fk1 << 1u32) - &fk;
        let f2k = &fk * &t;
        let f2k1 = &fk1 * &fk1 + &fk * &fk;
        fk = f2k;
        fk1 = f2k1;

        if (n >> i) & 1 == 1 {
            let sum = &fk + &fk1;
            fk = std::mem::replace(&mut fk1, sum);
        }
    }

    fk
}

/// `Calculator` backed by [`reference_fibonacci`]. Ignores the memory limit.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceFastDoubling;

impl ReferenceFastDoubling {
    /// Create a new reference calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for ReferenceFastDoubling {
    fn calculate(&self, n: u64, _opts: &Options) -> Result<String, FibError> {
        Ok(reference_fibonacci(n).to_string())
    }

    fn name(&self) -> &'static str {
        "Reference"
    }
}
