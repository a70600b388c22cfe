//! Fast Doubling over limb chains.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k+1)^2 + F(k)^2
//!
//! Scans the index from its highest set bit down. Each bit allocates a fresh
//! scratch set, and results are rotated into the running pair by swapping
//! limb buffers, never by copying them.

use tracing::{debug, trace};

use crate::arith::{add, double_inplace, mul, sub};
use crate::calculator::Calculator;
use crate::chain::LimbChain;
use crate::constants::SCRATCH_CHAINS;
use crate::error::FibError;
use crate::memory_budget::check_step;
use crate::options::Options;

/// Fast Doubling calculator over base-10^18 limb chains.
///
/// # Example
/// ```
/// use fibdrv_core::calculator::Calculator;
/// use fibdrv_core::fastdoubling::LimbFastDoubling;
/// use fibdrv_core::options::Options;
///
/// let calc = LimbFastDoubling::new();
/// let result = calc.calculate(100, &Options::default()).unwrap();
/// assert_eq!(result, "354224848179261915075");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LimbFastDoubling;

impl LimbFastDoubling {
    /// Create a new `LimbFastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for LimbFastDoubling {
    fn calculate(&self, n: u64, opts: &Options) -> Result<String, FibError> {
        let fk = execute_doubling_loop(n, opts)?;
        let rendered = fk.to_decimal_string()?;
        debug!(n, digits = rendered.len(), "Calculation complete");
        Ok(rendered)
    }

    fn name(&self) -> &'static str {
        "LimbFastDoubling"
    }
}

/// Allocate one bit's worth of zeroed scratch chains.
fn scratch() -> Result<[LimbChain; SCRATCH_CHAINS], FibError> {
    Ok([
        LimbChain::new(0)?,
        LimbChain::new(0)?,
        LimbChain::new(0)?,
        LimbChain::new(0)?,
        LimbChain::new(0)?,
        LimbChain::new(0)?,
    ])
}

/// Run the doubling loop and return the chain holding F(n).
pub(crate) fn execute_doubling_loop(n: u64, opts: &Options) -> Result<LimbChain, FibError> {
    let num_bits = 64 - n.leading_zeros();
    debug!(n, bits = num_bits, "Starting fast doubling");

    let mut fk = LimbChain::new(0)?;
    let mut fk1 = LimbChain::new(1)?;

    for i in (0..num_bits).rev() {
        // fk1 >= fk, so it bounds the size of this step.
        check_step(fk1.len(), opts.memory_limit)?;

        let [mut t0, mut t1, mut t2, mut t3, mut t4, mut t5] = scratch()?;

        // F(2k+1)
        mul(&fk1, &fk1, &mut t0)?;
        mul(&fk, &fk, &mut t1)?;
        add(&t0, &t1, &mut t2)?;

        // F(2k)
        double_inplace(&mut fk1)?;
        sub(&fk1, &fk, &mut t3)?;
        mul(&t3, &fk, &mut t4)?;

        if (n >> i) & 1 == 0 {
            fk.swap(&mut t4);
            fk1.swap(&mut t2);
        } else {
            // F(2k+2) = F(2k) + F(2k+1)
            add(&t2, &t4, &mut t5)?;
            fk.swap(&mut t2);
            fk1.swap(&mut t5);
        }

        trace!(bit = i, limbs = fk.len(), "Doubling step");
    }

    Ok(fk)
}
