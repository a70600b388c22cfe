//! Memory budget estimation and validation.

use crate::constants::{LIMB_DIGITS, SCRATCH_CHAINS};
use crate::error::FibError;

/// log10 of the golden ratio; F(n) has about `n * LOG10_PHI` decimal digits.
const LOG10_PHI: f64 = 0.208_987_640_249_978_73;

/// Bytes per limb.
const LIMB_BYTES: usize = std::mem::size_of::<u64>();

/// Chains alive at the peak of one doubling step: the two running values
/// plus the scratch set.
const LIVE_CHAINS: usize = 2 + SCRATCH_CHAINS;

/// Memory estimate for a Fibonacci computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEstimate {
    /// Limbs in the result chain.
    pub result_limbs: usize,
    /// Bytes held by the result chain.
    pub result_bytes: usize,
    /// Bytes held by the other running chain and the scratch set.
    pub temp_bytes: usize,
    /// Total estimated bytes.
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory usage for computing F(n).
    ///
    /// `result_limbs` bounds the limbs of F(n) itself. `total_bytes` is the
    /// working set of the last doubling step, the largest one
    /// the driver checks against the memory limit, so any limit of at least
    /// `total_bytes` lets the computation finish.
    #[must_use]
    pub fn estimate(n: u64) -> Self {
        let result_limbs = limbs_of(n);
        let result_bytes = result_limbs.saturating_mul(LIMB_BYTES);
        // The last step starts from F(n/2 + 1); F(0) runs no step at all.
        let peak = if n == 0 {
            Self::for_limbs(result_limbs)
        } else {
            Self::for_limbs(step_limbs(limbs_of((n >> 1) + 1)))
        };
        let total_bytes = peak.total_bytes.max(result_bytes);
        Self {
            result_limbs,
            result_bytes,
            temp_bytes: total_bytes - result_bytes,
            total_bytes,
        }
    }

    /// Working set of a doubling step whose outputs have `limbs` limbs.
    #[must_use]
    pub fn for_limbs(limbs: usize) -> Self {
        let result_bytes = limbs.saturating_mul(LIMB_BYTES);
        let temp_bytes = result_bytes.saturating_mul(LIVE_CHAINS - 1);
        Self {
            result_limbs: limbs,
            result_bytes,
            temp_bytes,
            total_bytes: result_bytes.saturating_add(temp_bytes),
        }
    }

    /// Check if the computation fits within the given memory limit.
    ///
    /// `None` means unlimited (always fits).
    #[must_use]
    pub fn fits_in(&self, limit: Option<usize>) -> bool {
        match limit {
            None => true,
            Some(l) => self.total_bytes <= l,
        }
    }
}

/// Upper bound on the limbs of F(n): about `n * log10(phi)` digits.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn limbs_of(n: u64) -> usize {
    let digits = (n as f64 * LOG10_PHI).ceil() as usize;
    digits / LIMB_DIGITS + 1
}

/// Limbs a doubling step may produce from running values of `current_limbs`.
fn step_limbs(current_limbs: usize) -> usize {
    current_limbs.saturating_mul(2).saturating_add(1)
}

/// Fail with `OutOfMemory` when the step that grows running values of
/// `current_limbs` limbs would not fit `limit`.
pub(crate) fn check_step(current_limbs: usize, limit: Option<usize>) -> Result<(), FibError> {
    let next = MemoryEstimate::for_limbs(step_limbs(current_limbs));
    if next.fits_in(limit) {
        Ok(())
    } else {
        Err(FibError::OutOfMemory {
            limbs: next.result_limbs,
        })
    }
}

/// Size suffixes accepted by [`parse_memory_limit`].
const UNITS: [(char, usize); 4] = [('G', 1 << 30), ('M', 1 << 20), ('K', 1 << 10), ('B', 1)];

/// Parse a memory limit string (e.g., "8G", "512M", "1024K", "100B").
///
/// An empty string means no limit.
pub fn parse_memory_limit(s: &str) -> Result<Option<usize>, FibError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let (num_str, multiplier) = UNITS
        .iter()
        .find_map(|&(suffix, scale)| s.strip_suffix(suffix).map(|rest| (rest, scale)))
        .unwrap_or((s, 1));

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| FibError::InvalidInput(format!("invalid memory limit {s:?}: {e}")))?;
    value
        .checked_mul(multiplier)
        .map(Some)
        .ok_or_else(|| FibError::InvalidInput(format!("memory limit {s:?} overflows")))
}
