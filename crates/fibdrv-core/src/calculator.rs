//! The `Calculator` trait and cross-validation between implementations.

use tracing::{debug, warn};

use crate::error::FibError;
use crate::fastdoubling::LimbFastDoubling;
use crate::options::Options;
use crate::reference::ReferenceFastDoubling;

/// A Fibonacci calculator producing the exact decimal string of F(n).
pub trait Calculator: Send + Sync {
    /// Calculate F(n) with the given options.
    fn calculate(&self, n: u64, opts: &Options) -> Result<String, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &'static str;
}

/// Compute F(n) with the limb-chain driver and check it against the
/// reference calculator.
///
/// Returns the decimal string when both agree, `FibError::Mismatch`
/// otherwise.
pub fn verify(n: u64, opts: &Options) -> Result<String, FibError> {
    let primary = LimbFastDoubling::new();
    let reference = ReferenceFastDoubling::new();

    let value = primary.calculate(n, opts)?;
    let expected = reference.calculate(n, opts)?;

    if value != expected {
        warn!(
            n,
            primary = primary.name(),
            reference = reference.name(),
            "Result mismatch"
        );
        return Err(FibError::Mismatch { n });
    }

    debug!(n, digits = value.len(), "Result verified against reference");
    Ok(value)
}
