//! Instrument capability set.
//!
//! [`InstrumentDevice`] is what an outer polling loop drives: open the device,
//! size a buffer with [`read_len`](InstrumentDevice::read_len), read reports and
//! hand them to the converter from [`gip_converter`](InstrumentDevice::gip_converter).
//!
//! # Example
//! ```no_run
//! use strumlink::{DeviceError, InstrumentDevice, ToGip};
//!
//! fn pump(dev: &mut dyn InstrumentDevice, to_gip: &dyn ToGip) -> Result<(), DeviceError> {
//!     dev.open()?;
//!     let mut report = vec![0u8; dev.read_len()?];
//!     let convert = dev.gip_converter()?;
//!     let mut gip = [0u8; 64];
//!     loop {
//!         dev.read(&mut report)?;
//!         convert.apply(to_gip, &report, &mut gip);
//!     }
//! }
//! ```

use crate::error::DeviceError;
use crate::gip::GipConverter;

pub trait InstrumentDevice {
    /// Whether the device is present. Always `true` for a constructed device.
    fn exists(&self) -> bool;

    fn open(&mut self) -> Result<(), DeviceError>;

    /// Release the device. It may be opened again afterwards.
    fn close(&mut self);

    /// Read one raw report into `buf`, which should be [`read_len`](Self::read_len) bytes long.
    fn read(&mut self, buf: &mut [u8]) -> Result<(), DeviceError>;

    /// Length of one raw input report, validated against the model's minimum.
    fn read_len(&self) -> Result<usize, DeviceError>;

    fn gip_converter(&self) -> Result<GipConverter, DeviceError>;

    /// Human-readable device name.
    fn describe(&self) -> String;
}
