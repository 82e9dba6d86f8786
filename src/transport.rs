//! HID transport boundary.
//!
//! A [`HidTransport`] is the raw I/O channel an instrument reads reports from.
//! The crate ships one implementation over `hidapi`
//! ([`HidApiTransport`](crate::backends::hid::HidApiTransport), behind the `hid`
//! feature); tests and embedders can supply their own.

use crate::classify::UsbIds;
use crate::error::TransportError;

/// Raw HID input channel for a single device.
///
/// Identification fields must not change over the transport's lifetime.
pub trait HidTransport {
    fn vendor_id(&self) -> u16;
    fn product_id(&self) -> u16;
    /// Device release number (`bcdDevice`).
    fn revision(&self) -> u16;

    /// Size in bytes of one input report as delivered by [`read`](Self::read),
    /// including the leading report-ID byte.
    fn input_len(&self) -> usize;

    /// Open the underlying handle. `exclusive` requests that no other process
    /// may read the device while it is open.
    fn open(&mut self, exclusive: bool) -> Result<(), TransportError>;

    /// Block until one input report is available and copy it into `buf`.
    fn read(&mut self, buf: &mut [u8]) -> Result<(), TransportError>;

    /// Close the handle. Must be safe to call when already closed; the transport
    /// can be opened again afterwards.
    fn release(&mut self);

    /// All three identification fields at once.
    fn ids(&self) -> UsbIds {
        UsbIds::new(self.vendor_id(), self.product_id(), self.revision())
    }
}

impl<T: HidTransport + ?Sized> HidTransport for Box<T> {
    fn vendor_id(&self) -> u16 {
        (**self).vendor_id()
    }
    fn product_id(&self) -> u16 {
        (**self).product_id()
    }
    fn revision(&self) -> u16 {
        (**self).revision()
    }
    fn input_len(&self) -> usize {
        (**self).input_len()
    }
    fn open(&mut self, exclusive: bool) -> Result<(), TransportError> {
        (**self).open(exclusive)
    }
    fn read(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        (**self).read(buf)
    }
    fn release(&mut self) {
        (**self).release()
    }
    fn ids(&self) -> UsbIds {
        (**self).ids()
    }
}
