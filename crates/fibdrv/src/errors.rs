//! Error handling and exit codes.

use fibdrv_core::constants::exit_codes;
use fibdrv_core::FibError;
use fibdrv_device::DeviceError;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::OutOfMemory { .. } => exit_codes::ERROR_OUT_OF_MEMORY,
        FibError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        FibError::InvalidInput(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Map a device error to its exit code.
pub fn handle_device_error(err: &DeviceError) -> i32 {
    match err {
        DeviceError::Busy(_) => exit_codes::ERROR_BUSY,
        DeviceError::Fault { .. } => exit_codes::ERROR_GENERIC,
        DeviceError::Compute(inner) => handle_error(inner),
    }
}

/// Exit code for an application error, looking through its cause chain for
/// a typed error.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .chain()
        .find_map(|cause| {
            cause
                .downcast_ref::<FibError>()
                .map(handle_error)
                .or_else(|| cause.downcast_ref::<DeviceError>().map(handle_device_error))
        })
        .unwrap_or(exit_codes::ERROR_GENERIC);
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&FibError::OutOfMemory { limbs: 1 }), 12);
        assert_eq!(handle_error(&FibError::Mismatch { n: 5 }), 3);
        assert_eq!(handle_error(&FibError::InvalidInput("bad".into())), 4);
    }

    #[test]
    fn device_error_codes() {
        assert_eq!(handle_device_error(&DeviceError::Busy("fibonacci")), 16);
        assert_eq!(
            handle_device_error(&DeviceError::Compute(FibError::OutOfMemory { limbs: 1 })),
            12
        );
    }

    #[test]
    fn exit_code_through_context() {
        let err = Err::<(), _>(FibError::OutOfMemory { limbs: 9 })
            .context("computing F(1000)")
            .unwrap_err();
        assert_eq!(exit_code(&err), 12);

        let err = anyhow::anyhow!("plain failure");
        assert_eq!(exit_code(&err), 1);
    }
}
