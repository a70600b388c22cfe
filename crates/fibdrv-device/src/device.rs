//! Device gate, offset cursor, and read/write handlers.

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

use fibdrv_core::calculator::Calculator;
use fibdrv_core::fastdoubling::LimbFastDoubling;
use fibdrv_core::options::Options;

use crate::error::DeviceError;

/// Name the device registers under.
pub const DEVICE_NAME: &str = "fibonacci";

/// Default upper bound for the file offset, and so for the index.
pub const MAX_LENGTH: u64 = 500;

/// Origin for [`FibHandle::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// From the start.
    Set,
    /// From the current position.
    Cur,
    /// Backwards from the offset bound.
    End,
}

/// A Fibonacci device admitting one open handle at a time.
///
/// # Example
/// ```
/// use fibdrv_device::{FibDevice, Whence};
///
/// let device = FibDevice::default();
/// let mut handle = device.open().unwrap();
/// handle.seek(10, Whence::Set);
/// let mut buf = [0u8; 8];
/// let n = handle.read(&mut buf).unwrap();
/// assert_eq!(&buf[..n], b"55\0");
/// ```
pub struct FibDevice {
    gate: Mutex<()>,
    max_offset: u64,
    opts: Options,
}

impl FibDevice {
    /// Create a device whose offsets are clamped to `[0, max_offset]`.
    #[must_use]
    pub fn new(max_offset: u64) -> Self {
        Self {
            gate: Mutex::new(()),
            max_offset,
            opts: Options::default(),
        }
    }

    /// Use `opts` for every computation this device runs.
    #[must_use]
    pub fn with_options(mut self, opts: Options) -> Self {
        self.opts = opts;
        self
    }

    /// Offset bound of this device.
    #[must_use]
    pub fn max_offset(&self) -> u64 {
        self.max_offset
    }

    /// Open the device without blocking.
    ///
    /// Fails with [`DeviceError::Busy`] while another handle is open. The
    /// gate is released when the returned handle is dropped.
    pub fn open(&self) -> Result<FibHandle<'_>, DeviceError> {
        let Some(guard) = self.gate.try_lock() else {
            warn!(device = DEVICE_NAME, "Device is in use");
            return Err(DeviceError::Busy(DEVICE_NAME));
        };
        debug!(device = DEVICE_NAME, "Device opened");
        Ok(FibHandle {
            _guard: guard,
            device: self,
            pos: 0,
        })
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new(MAX_LENGTH)
    }
}

/// An open handle holding the device gate.
pub struct FibHandle<'a> {
    _guard: MutexGuard<'a, ()>,
    device: &'a FibDevice,
    pos: u64,
}

impl FibHandle<'_> {
    /// Current offset, which is the index the next read computes.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Move the offset and return the new position, clamped to
    /// `[0, max_offset]`. `Whence::End` counts back from the bound.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> u64 {
        let max = i128::from(self.device.max_offset);
        let target = match whence {
            Whence::Set => i128::from(offset),
            Whence::Cur => i128::from(self.pos) + i128::from(offset),
            Whence::End => max - i128::from(offset),
        };
        self.pos = u64::try_from(target.clamp(0, max)).unwrap_or(0);
        self.pos
    }

    /// Compute F(offset) and copy its digits plus a NUL terminator into
    /// `buf`. Returns the number of bytes written.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        let value = LimbFastDoubling::new().calculate(self.pos, &self.device.opts)?;
        let needed = value.len() + 1;
        if buf.len() < needed {
            return Err(DeviceError::Fault {
                needed,
                capacity: buf.len(),
            });
        }

        buf[..value.len()].copy_from_slice(value.as_bytes());
        buf[value.len()] = 0;
        debug!(offset = self.pos, bytes = needed, "Device read");
        Ok(needed)
    }

    /// Writes are accepted and ignored.
    pub fn write(&mut self, _buf: &[u8]) -> usize {
        1
    }
}

impl Drop for FibHandle<'_> {
    fn drop(&mut self) {
        debug!(device = DEVICE_NAME, "Device released");
    }
}
