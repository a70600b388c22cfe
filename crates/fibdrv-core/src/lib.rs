//! # fibdrv-core
//!
//! Exact Fibonacci numbers as decimal strings. Big integers are chains of
//! base-10^18 limbs, least significant first, driven by Fast Doubling.

pub mod arith;
pub mod calculator;
pub mod chain;
pub mod constants;
pub mod error;
pub mod fastdoubling;
pub mod memory_budget;
pub mod options;
pub mod reference;

// Re-exports
pub use calculator::{verify, Calculator};
pub use chain::LimbChain;
pub use constants::{exit_codes, BOUND, LIMB_DIGITS};
pub use error::FibError;
pub use fastdoubling::LimbFastDoubling;
pub use options::Options;
pub use reference::ReferenceFastDoubling;

/// Compute F(n) and return its decimal string.
///
/// Convenience entry point using the limb-chain driver with default options.
///
/// # Example
/// ```
/// assert_eq!(fibdrv_core::fibonacci(10).unwrap(), "55");
/// assert_eq!(fibdrv_core::fibonacci(0).unwrap(), "0");
/// ```
pub fn fibonacci(n: u64) -> Result<String, FibError> {
    LimbFastDoubling::new().calculate(n, &Options::default())
}
