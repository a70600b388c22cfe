//! Error type shared by the limb arithmetic and the calculators.

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// A limb chain could not grow, or the computation would exceed the
    /// configured memory budget.
    #[error("out of memory while growing a limb chain to {limbs} limbs")]
    OutOfMemory {
        /// Limb count that was requested when the failure happened.
        limbs: usize,
    },

    /// The limb-chain result disagrees with the reference calculator.
    #[error("result mismatch against reference for F({n})")]
    Mismatch {
        /// Index whose results disagreed.
        n: u64,
    },

    /// Invalid input or configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
