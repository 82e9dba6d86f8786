//! Instrument metadata snapshot.
//!
//! [`InstrumentInfo`] is a lightweight, cloneable description of an instrument
//! suitable for logging, diagnostics dumps and UI display. It is derived
//! entirely from the identification fields, so it never touches the transport.
//!
//! # Example
//! ```
//! use strumlink::{InstrumentInfo, UsbIds};
//!
//! let info = InstrumentInfo::from_ids(UsbIds::new(0x12BA, 0x0200, 0x0100));
//! assert_eq!(info.name, "PS3 Rock Band Guitar");
//! assert_eq!(info.expected_report_len, Some(28));
//! ```

use crate::classify::{classify, UsbIds};
use crate::gip::GipConverter;
use crate::variant::DeviceVariant;
use serde::{Deserialize, Serialize};

/// Snapshot of what is known about one instrument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentInfo {
    /// Raw identification fields.
    pub ids: UsbIds,

    /// Classified model.
    pub variant: DeviceVariant,

    /// Display name. For unknown devices this embeds the hex ids.
    pub name: String,

    /// Minimum report length for the model, if known.
    pub expected_report_len: Option<usize>,

    /// Converter the model uses, if known.
    pub converter: Option<GipConverter>,
}

impl InstrumentInfo {
    /// Classify `ids` and build the snapshot.
    pub fn from_ids(ids: UsbIds) -> Self {
        Self::new(ids, classify(ids))
    }

    /// Build the snapshot for an already classified device.
    pub fn new(ids: UsbIds, variant: DeviceVariant) -> Self {
        Self {
            ids,
            variant,
            name: display_name(ids, variant),
            expected_report_len: variant.expected_report_len(),
            converter: variant.gip_converter(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Display name for a classified device; unknown devices show their ids.
pub(crate) fn display_name(ids: UsbIds, variant: DeviceVariant) -> String {
    match variant.display_name() {
        Some(name) => name.to_string(),
        None => format!("Unknown - {ids}"),
    }
}
