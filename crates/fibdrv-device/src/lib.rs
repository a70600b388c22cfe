//! # fibdrv-device
//!
//! A user-space rendition of the Fibonacci character device. The file
//! offset selects the index, a read returns the decimal string of F(offset)
//! followed by a NUL byte, and only one handle may be open at a time.

pub mod device;
pub mod error;

pub use device::{FibDevice, FibHandle, Whence, DEVICE_NAME, MAX_LENGTH};
pub use error::DeviceError;
