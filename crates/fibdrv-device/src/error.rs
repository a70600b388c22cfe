//! Device error type.

use fibdrv_core::FibError;

/// Errors surfaced by the device layer.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Another handle currently holds the device.
    #[error("{0} is in use")]
    Busy(&'static str),

    /// The caller's buffer cannot hold the result and its terminator.
    #[error("buffer of {capacity} bytes cannot hold {needed} bytes")]
    Fault {
        /// Bytes required, terminator included.
        needed: usize,
        /// Bytes the caller supplied.
        capacity: usize,
    },

    /// The computation itself failed.
    #[error(transparent)]
    Compute(#[from] FibError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_error_display() {
        assert_eq!(DeviceError::Busy("fibonacci").to_string(), "fibonacci is in use");
        let err = DeviceError::Fault {
            needed: 22,
            capacity: 8,
        };
        assert_eq!(err.to_string(), "buffer of 8 bytes cannot hold 22 bytes");
    }

    #[test]
    fn compute_error_is_transparent() {
        let err = DeviceError::from(FibError::OutOfMemory { limbs: 3 });
        assert_eq!(
            err.to_string(),
            FibError::OutOfMemory { limbs: 3 }.to_string()
        );
    }
}
