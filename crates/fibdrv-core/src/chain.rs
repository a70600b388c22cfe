//! The limb chain: an owned, least-significant-first sequence of base-10^18
//! limbs representing one non-negative integer.
//!
//! A chain always carries at least one limb. The most significant limb is
//! non-zero unless the chain is the single-limb zero. Limbs only grow at the
//! high end; the whole sequence is released when the chain is dropped.

use std::fmt;

use crate::constants::{BOUND, LIMB_DIGITS};
use crate::error::FibError;

/// Arbitrary-precision non-negative integer stored as base-10^18 limbs.
///
/// # Example
/// ```
/// use fibdrv_core::chain::LimbChain;
///
/// let chain = LimbChain::new(42).unwrap();
/// assert_eq!(chain.len(), 1);
/// assert_eq!(chain.to_decimal_string().unwrap(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimbChain {
    pub(crate) limbs: Vec<u64>,
}

impl LimbChain {
    /// Create a chain holding a single limb. `value` must be below [`BOUND`].
    pub fn new(value: u64) -> Result<Self, FibError> {
        debug_assert!(value < BOUND, "limb value {value} out of range");
        let mut chain = Self { limbs: Vec::new() };
        chain.append(value)?;
        Ok(chain)
    }

    /// Build a chain from explicit limbs, least significant first.
    ///
    /// An empty slice yields zero. High zero limbs are trimmed so the result
    /// is in canonical form.
    pub fn from_limbs(limbs: &[u64]) -> Result<Self, FibError> {
        debug_assert!(limbs.iter().all(|&l| l < BOUND));
        if limbs.is_empty() {
            return Self::new(0);
        }
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(limbs.len())
            .map_err(|_| FibError::OutOfMemory { limbs: limbs.len() })?;
        owned.extend_from_slice(limbs);
        let mut chain = Self { limbs: owned };
        chain.trim_high_zeros();
        Ok(chain)
    }

    /// Number of limbs in the chain (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Whether the chain is the single-limb zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Read-only view of the limbs, least significant first.
    #[must_use]
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Grow the chain by one limb at the high end.
    ///
    /// On allocation failure the chain is left exactly as it was.
    pub(crate) fn append(&mut self, value: u64) -> Result<(), FibError> {
        self.limbs
            .try_reserve(1)
            .map_err(|_| FibError::OutOfMemory {
                limbs: self.limbs.len() + 1,
            })?;
        self.limbs.push(value);
        Ok(())
    }

    /// Write `value` at `index`, appending when `index` is one past the end.
    pub(crate) fn store(&mut self, index: usize, value: u64) -> Result<(), FibError> {
        debug_assert!(value < BOUND);
        if let Some(slot) = self.limbs.get_mut(index) {
            *slot = value;
            Ok(())
        } else {
            debug_assert_eq!(index, self.limbs.len(), "limb store skipped a position");
            self.append(value)
        }
    }

    /// Drop limbs beyond `len`, keeping at least one.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.limbs.truncate(len.max(1));
    }

    /// Pop zero limbs from the high end, keeping at least one.
    pub(crate) fn trim_high_zeros(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Exchange the limb sequences of two chains without copying limb data.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.limbs, &mut other.limbs);
    }

    /// Render the exact decimal representation.
    ///
    /// The output is reserved up front from the width of the most significant
    /// limb and filled from the top limb down: the top limb contributes its
    /// natural width, every lower limb exactly [`LIMB_DIGITS`] zero-padded
    /// digits.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_decimal_string(&self) -> Result<String, FibError> {
        let top = self.limbs.len() - 1;
        let top_width = decimal_width(self.limbs[top]);
        let width = top_width + LIMB_DIGITS * top;

        let mut out = String::new();
        out.try_reserve_exact(width)
            .map_err(|_| FibError::OutOfMemory { limbs: self.len() })?;

        for (i, &limb) in self.limbs.iter().enumerate().rev() {
            let digits = if i == top { top_width } else { LIMB_DIGITS };
            let mut group = [b'0'; LIMB_DIGITS];
            let mut value = limb;
            for slot in group[..digits].iter_mut().rev() {
                *slot = b'0' + (value % 10) as u8;
                value /= 10;
            }
            out.extend(group[..digits].iter().copied().map(char::from));
        }
        debug_assert_eq!(out.len(), width);

        Ok(out)
    }
}

impl fmt::Display for LimbChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut limbs = self.limbs.iter().rev();
        if let Some(top) = limbs.next() {
            write!(f, "{top}")?;
        }
        for limb in limbs {
            write!(f, "{limb:0width$}", width = LIMB_DIGITS)?;
        }
        Ok(())
    }
}

/// Natural decimal width of a limb value; zero is one digit wide.
fn decimal_width(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |d| d as usize + 1)
}
