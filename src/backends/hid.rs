//! `hidapi`-backed transport.
//!
//! [`HidApiTransport`] wraps one `hidapi` device entry. It is responsible for:
//! - reading the identification fields from the enumeration entry
//! - sizing input reports from the device's report descriptor
//! - opening/closing the OS handle on demand (re-open after release is allowed)
//! - framing reads so every report starts with its report-ID byte
//!
//! It does **not** enumerate devices; callers pick entries from
//! `HidApi::device_list()` themselves.

use crate::classify::UsbIds;
use crate::config::HidConfig;
use crate::descriptor::{input_layout, InputLayout};
use crate::error::TransportError;
use crate::transport::HidTransport;
use hidapi::{DeviceInfo, HidApi, HidDevice};
use std::ffi::{CStr, CString};
use std::sync::Arc;
use tracing::{debug, warn};

/// Largest report descriptor hidapi will return (`HID_API_MAX_REPORT_DESCRIPTOR_SIZE`).
const MAX_DESCRIPTOR_LEN: usize = 4096;

/// HID transport over a shared `hidapi` context.
pub struct HidApiTransport {
    api: Arc<HidApi>,
    path: CString,
    ids: UsbIds,
    product: Option<String>,
    layout: InputLayout,
    input_len: usize,
    config: HidConfig,
    device: Option<HidDevice>,
}

impl HidApiTransport {
    /// Build a closed transport for `info`.
    ///
    /// The device is opened briefly to fetch its report descriptor, then closed
    /// again. Fails if the descriptor can't be read and the config has no
    /// `fallback_input_len`; the fallback's report-ID framing then comes from
    /// `fallback_report_ids`.
    pub fn new(
        api: Arc<HidApi>,
        info: &DeviceInfo,
        config: HidConfig,
    ) -> Result<Self, TransportError> {
        let ids = UsbIds::new(info.vendor_id(), info.product_id(), info.release_number());
        let path = info.path().to_owned();

        let (layout, input_len) = match fetch_layout(&api, &path) {
            Ok(layout) => (layout, layout.input_len(config.report_id_prefix)),
            Err(e) => match fallback_layout(&config) {
                Some((layout, len)) => {
                    warn!(
                        "report descriptor for {} unavailable ({}), assuming {} byte reports, report_ids={}",
                        ids, e, len, layout.uses_report_ids
                    );
                    (layout, len)
                }
                None => return Err(e),
            },
        };

        debug!(
            "HID {} path={} input_len={} report_ids={}",
            ids,
            path.to_string_lossy(),
            input_len,
            layout.uses_report_ids
        );

        Ok(Self {
            api,
            path,
            ids,
            product: info.product_string().map(str::to_owned),
            layout,
            input_len,
            config,
            device: None,
        })
    }

    /// Product string reported by the device, if any.
    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn path(&self) -> &CStr {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.device.is_some()
    }

    /// Whether reads need a `0` report-ID byte inserted in front of the payload.
    fn inserts_report_id(&self) -> bool {
        inserts_report_id(&self.config, &self.layout)
    }
}

/// Layout and input length to assume when the report descriptor is unavailable.
fn fallback_layout(config: &HidConfig) -> Option<(InputLayout, usize)> {
    let len = config.fallback_input_len?;
    let layout = InputLayout {
        report_len: 0,
        uses_report_ids: config.fallback_report_ids,
    };
    Some((layout, len))
}

fn inserts_report_id(config: &HidConfig, layout: &InputLayout) -> bool {
    config.report_id_prefix && !layout.uses_report_ids
}

fn fetch_layout(api: &HidApi, path: &CStr) -> Result<InputLayout, TransportError> {
    let device = api.open_path(path)?;
    let mut buf = vec![0u8; MAX_DESCRIPTOR_LEN];
    let n = device.get_report_descriptor(&mut buf)?;
    Ok(input_layout(&buf[..n])?)
}

/// Read one report into `buf`, optionally reserving `buf[0]` for a `0` report ID.
///
/// Returns the number of bytes written, counting the inserted ID byte.
fn read_framed<F>(
    buf: &mut [u8],
    insert_report_id: bool,
    read: F,
) -> Result<usize, TransportError>
where
    F: FnOnce(&mut [u8]) -> Result<usize, TransportError>,
{
    if !insert_report_id {
        return read(buf);
    }
    let (id, payload) = buf.split_first_mut().ok_or(TransportError::EmptyBuffer)?;
    *id = 0;
    Ok(read(payload)? + 1)
}

impl HidTransport for HidApiTransport {
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
        if self.device.is_some() {
            return Ok(());
        }
        if exclusive {
            // hidapi exposes no sharing mode; the OS default applies.
            debug!("exclusive open requested for {}, opening shared", self.ids);
        }
        let device = self.api.open_path(&self.path)?;
        // Instruments are polled by a blocking loop.
        device.set_blocking_mode(true)?;
        self.device = Some(device);
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        let insert = self.inserts_report_id();
        let device = self.device.as_ref().ok_or(TransportError::NotOpen)?;
        #[cfg_attr(not(feature = "debug-log"), allow(unused_variables))]
        let n = read_framed(buf, insert, |out| Ok(device.read(out)?))?;

        #[cfg(feature = "debug-log")]
        tracing::trace!("[HID/READ] {} n={} bytes: {:02X?}", self.ids, n, &buf[..n]);

        Ok(())
    }

    fn release(&mut self) {
        if self.device.take().is_some() {
            debug!("released HID handle for {}", self.ids);
        }
    }
}
