//! Limb geometry and process exit codes.

/// Exclusive upper bound of a single limb value (10^18).
pub const BOUND: u64 = 1_000_000_000_000_000_000;

/// Decimal digits carried by every limb except the most significant one.
pub const LIMB_DIGITS: usize = 18;

/// Number of scratch chains the fast doubling driver allocates per bit.
pub const SCRATCH_CHAINS: usize = 6;

/// Exit codes used by the `fibdrv` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Limb-chain result disagreed with the reference calculator.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Allocation failed or the memory budget was exceeded (ENOMEM).
    pub const ERROR_OUT_OF_MEMORY: i32 = 12;
    /// The device gate was already held (EBUSY).
    pub const ERROR_BUSY: i32 = 16;
}
