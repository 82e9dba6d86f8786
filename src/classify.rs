//! Device classification from USB identification fields.
//!
//! [`classify`] maps a [`UsbIds`] triple to a [`DeviceVariant`]. Rules are
//! grouped by vendor ID, and within a vendor every rule tests a distinct product
//! ID (plus the revision mode byte for Santroller), so at most one rule can
//! match. Adding a model means adding one arm; existing arms keep their meaning.

use crate::ids::*;
use crate::variant::DeviceVariant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vendor ID, product ID and revision (`bcdDevice`) reported by a HID device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UsbIds {
    pub vendor_id: u16,
    pub product_id: u16,
    pub revision: u16,
}

impl UsbIds {
    pub const fn new(vendor_id: u16, product_id: u16, revision: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            revision,
        }
    }

    /// High byte of the revision. Santroller firmware stores its mode here.
    #[inline]
    pub const fn revision_high(&self) -> u8 {
        (self.revision >> 8) as u8
    }
}

/// Formats as `VVVV:PPPP:RRRR` in uppercase hex.
impl fmt::Display for UsbIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X}:{:04X}:{:04X}",
            self.vendor_id, self.product_id, self.revision
        )
    }
}

/// Identify the guitar model behind a set of identification fields.
///
/// Returns [`DeviceVariant::Unknown`] when no rule matches, including a
/// Santroller whose revision carries a mode byte other than GH or RB.
pub fn classify(ids: UsbIds) -> DeviceVariant {
    match (ids.vendor_id, ids.product_id) {
        (VENDOR_PID_CODES, PRODUCT_SANTROLLER) => match ids.revision_high() {
            SANTROLLER_MODE_RB => DeviceVariant::SantrollerRb,
            SANTROLLER_MODE_GH => DeviceVariant::SantrollerGh,
            _ => DeviceVariant::Unknown,
        },

        (VENDOR_SONY_PS3, PRODUCT_PS3_RB) => DeviceVariant::Ps3Rb,
        (VENDOR_SONY_PS3, PRODUCT_PS3_GH) => DeviceVariant::Ps3Gh,

        (VENDOR_MADCATZ_LEGACY, PRODUCT_WII_RB1 | PRODUCT_WII_RB2) => DeviceVariant::WiiRb,

        (VENDOR_MADCATZ, PRODUCT_PS4_STRATOCASTER) => DeviceVariant::Ps4RbMadCatz,

        (VENDOR_PDP, PRODUCT_PS4_JAGUAR | PRODUCT_PS4_RIFFMASTER) => DeviceVariant::Ps4RbPdp,
        (VENDOR_PDP, PRODUCT_PS5_RIFFMASTER) => DeviceVariant::Ps5RbPdp,

        (VENDOR_RAPHNET, PRODUCT_RAPHNET_WII) => DeviceVariant::RaphnetGh,

        _ => DeviceVariant::Unknown,
    }
}
