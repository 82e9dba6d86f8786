//! HID guitar wrapper.
//!
//! [`HidInstrument`] binds one [`HidTransport`] to the [`DeviceVariant`] it was
//! classified as. Classification happens once in [`HidInstrument::new`]; the
//! variant and ids are cached and never recomputed, so `describe`, `read_len`
//! and `gip_converter` stay consistent for the instrument's lifetime.
//!
//! This module does **not**:
//! - discover devices (callers construct transports themselves)
//! - retry failed opens or reads (errors go straight to the caller)
//! - run converters (it only selects them)

use crate::classify::{classify, UsbIds};
use crate::device::InstrumentDevice;
use crate::error::DeviceError;
use crate::gip::GipConverter;
use crate::metadata::{display_name, InstrumentInfo};
use crate::transport::HidTransport;
use crate::variant::DeviceVariant;
use std::fmt;
use tracing::{debug, warn};

/// A guitar controller read through a raw HID transport.
///
/// Owns its transport exclusively. Dropping the instrument releases it.
pub struct HidInstrument<T: HidTransport> {
    transport: T,
    ids: UsbIds,
    variant: DeviceVariant,
    open: bool,
}

impl<T: HidTransport> HidInstrument<T> {
    /// Wrap a not-yet-open transport and classify it.
    pub fn new(transport: T) -> Self {
        let ids = transport.ids();
        let variant = classify(ids);
        debug!("classified {} as {}", ids, variant);
        Self {
            transport,
            ids,
            variant,
            open: false,
        }
    }

    #[inline]
    pub fn variant(&self) -> DeviceVariant {
        self.variant
    }

    #[inline]
    pub fn ids(&self) -> UsbIds {
        self.ids
    }

    /// Whether [`open`](InstrumentDevice::open) succeeded and no
    /// [`close`](InstrumentDevice::close) followed.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn info(&self) -> InstrumentInfo {
        InstrumentInfo::new(self.ids, self.variant)
    }

    fn unsupported(&self) -> DeviceError {
        DeviceError::UnsupportedDevice { ids: self.ids }
    }
}

impl<T: HidTransport> InstrumentDevice for HidInstrument<T> {
    fn exists(&self) -> bool {
        true
    }

    fn open(&mut self) -> Result<(), DeviceError> {
        if !self.variant.is_known() {
            warn!("refusing to open unsupported device {}", self.ids);
            return Err(self.unsupported());
        }

        self.transport
            .open(false)
            .map_err(|source| DeviceError::OpenFailed {
                device: self.describe(),
                source,
            })?;
        self.open = true;
        debug!("opened {} ({})", self.describe(), self.ids);
        Ok(())
    }

    fn close(&mut self) {
        self.transport.release();
        if self.open {
            debug!("closed {} ({})", self.describe(), self.ids);
        }
        self.open = false;
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), DeviceError> {
        match self.transport.read(buf) {
            Ok(()) => Ok(()),
            Err(source) => Err(DeviceError::ReadFailed {
                device: self.describe(),
                source,
            }),
        }
    }

    fn read_len(&self) -> Result<usize, DeviceError> {
        let expected = self
            .variant
            .expected_report_len()
            .ok_or_else(|| self.unsupported())?;

        let actual = self.transport.input_len();
        if actual < expected {
            return Err(DeviceError::ReportLengthMismatch {
                variant: self.variant,
                actual,
                expected,
            });
        }
        Ok(actual)
    }

    fn gip_converter(&self) -> Result<GipConverter, DeviceError> {
        self.variant
            .gip_converter()
            .ok_or_else(|| self.unsupported())
    }

    fn describe(&self) -> String {
        display_name(self.ids, self.variant)
    }
}

impl<T: HidTransport> fmt::Display for HidInstrument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl<T: HidTransport> fmt::Debug for HidInstrument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HidInstrument")
            .field("ids", &self.ids)
            .field("variant", &self.variant)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl<T: HidTransport> Drop for HidInstrument<T> {
    fn drop(&mut self) {
        self.transport.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counters shared between a test and the transport it hands away.
    #[derive(Default)]
    struct Calls {
        opens: Cell<u32>,
        releases: Cell<u32>,
    }

    struct FakeTransport {
        ids: UsbIds,
        input_len: usize,
        fail_open: bool,
        fail_read: bool,
        report: Vec<u8>,
        calls: Rc<Calls>,
    }

    impl FakeTransport {
        fn new(vid: u16, pid: u16, rev: u16, input_len: usize) -> Self {
            Self {
                ids: UsbIds::new(vid, pid, rev),
                input_len,
                fail_open: false,
                fail_read: false,
                report: Vec::new(),
                calls: Rc::default(),
            }
        }
    }

    impl HidTransport for FakeTransport {
        fn vendor_id(&self) -> u16 {
            self.ids.vendor_id
        }
        fn product_id(&self) -> u16 {
            self.ids.product_id
        }
        fn revision(&self) -> u16 {
            self.ids.revision
        }
        fn input_len(&self) -> usize {
            self.input_len
        }
        fn open(&mut self, exclusive: bool) -> Result<(), TransportError> {
            assert!(!exclusive, "instruments open shared");
            self.calls.opens.set(self.calls.opens.get() + 1);
            if self.fail_open {
                return Err(TransportError::Hid("access denied".into()));
            }
            Ok(())
        }
        fn read(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
            if self.fail_read {
                return Err(TransportError::NotOpen);
            }
            let n = self.report.len().min(buf.len());
            buf[..n].copy_from_slice(&self.report[..n]);
            Ok(())
        }
        fn release(&mut self) {
            self.calls.releases.set(self.calls.releases.get() + 1);
        }
    }

    #[test]
    fn santroller_rb_example() {
        let dev = HidInstrument::new(FakeTransport::new(0x1209, 0x2882, 0x0412, 7));
        assert_eq!(dev.variant(), DeviceVariant::SantrollerRb);
        assert_eq!(dev.read_len().unwrap(), 7);
        assert_eq!(dev.gip_converter().unwrap(), GipConverter::SantrollerRb);
        assert!(dev.exists());
    }

    #[test]
    fn read_len_returns_transport_len_when_longer() {
        let dev = HidInstrument::new(FakeTransport::new(0x12BA, 0x0200, 0x0000, 49));
        assert_eq!(dev.read_len().unwrap(), 49);
    }

    #[test]
    fn read_len_rejects_short_reports() {
        let dev = HidInstrument::new(FakeTransport::new(0x0E6F, 0x0249, 0, 63));
        let err = dev.read_len().unwrap_err();
        assert!(matches!(
            err,
            DeviceError::ReportLengthMismatch {
                variant: DeviceVariant::Ps5RbPdp,
                actual: 63,
                expected: 64,
            }
        ));
        assert_eq!(
            err.to_string(),
            "PS5_RB_PDP read length (63) is less than expected (64)"
        );
    }

    #[test]
    fn unknown_device_is_unsupported_everywhere() {
        let transport = FakeTransport::new(0x9999, 0x0001, 0x0000, 64);
        let calls = transport.calls.clone();
        let mut dev = HidInstrument::new(transport);

        assert!(matches!(dev.open(), Err(DeviceError::UnsupportedDevice { .. })));
        assert_eq!(calls.opens.get(), 0);
        assert!(!dev.is_open());
        assert!(matches!(dev.read_len(), Err(DeviceError::UnsupportedDevice { .. })));
        assert!(matches!(
            dev.gip_converter(),
            Err(DeviceError::UnsupportedDevice { .. })
        ));
        assert!(dev.describe().contains("9999:0001"));
        assert_eq!(dev.to_string(), "Unknown - 9999:0001:0000");
    }

    #[test]
    fn open_failure_is_reported() {
        let mut transport = FakeTransport::new(0x0738, 0x8261, 0, 64);
        transport.fail_open = true;
        let mut dev = HidInstrument::new(transport);

        let err = dev.open().unwrap_err();
        assert!(matches!(err, DeviceError::OpenFailed { .. }));
        assert_eq!(
            err.to_string(),
            "failed to open PS4 Stratocaster: HID error: access denied"
        );
        assert!(!dev.is_open());
    }

    #[test]
    fn read_copies_report_and_surfaces_failure() {
        let mut transport = FakeTransport::new(0x289B, 0x0080, 0, 15);
        transport.report = (0..15).collect();
        let mut dev = HidInstrument::new(transport);
        dev.open().unwrap();

        let mut buf = vec![0u8; dev.read_len().unwrap()];
        dev.read(&mut buf).unwrap();
        assert_eq!(buf, (0..15).collect::<Vec<u8>>());

        let mut failing = FakeTransport::new(0x289B, 0x0080, 0, 15);
        failing.fail_read = true;
        let mut dev = HidInstrument::new(failing);
        assert!(matches!(
            dev.read(&mut buf),
            Err(DeviceError::ReadFailed { .. })
        ));
    }

    #[test]
    fn close_then_reopen() {
        let transport = FakeTransport::new(0x1BAD, 0x3010, 0, 28);
        let calls = transport.calls.clone();
        let mut dev = HidInstrument::new(transport);

        dev.open().unwrap();
        dev.close();
        assert!(!dev.is_open());
        dev.open().unwrap();
        assert!(dev.is_open());
        dev.close();
        dev.close();

        assert_eq!(calls.opens.get(), 2);
        assert_eq!(calls.releases.get(), 3);
    }

    #[test]
    fn drop_releases_transport() {
        let transport = FakeTransport::new(0x12BA, 0x0100, 0, 28);
        let calls = transport.calls.clone();
        {
            let mut dev = HidInstrument::new(transport);
            dev.open().unwrap();
        }
        assert_eq!(calls.releases.get(), 1);
    }

    #[test]
    fn info_matches_instrument() {
        let dev = HidInstrument::new(FakeTransport::new(0x0E6F, 0x0173, 0, 64));
        let info = dev.info();
        assert_eq!(info.variant, DeviceVariant::Ps4RbPdp);
        assert_eq!(info.name, dev.describe());
        assert_eq!(info.converter, Some(GipConverter::Ps4Rb));
    }
}
