//! Backend configuration.
//!
//! [`HidConfig`] tunes how [`HidApiTransport`](crate::backends::hid::HidApiTransport)
//! frames reports. Every field has a default, so an empty TOML document is a
//! valid config.
//!
//! ```toml
//! # Keep a leading report-ID byte on every report (Windows framing).
//! report_id_prefix = true
//! # Input length to assume when the report descriptor can't be fetched.
//! fallback_input_len = 28
//! # Whether the device behind that fallback numbers its reports itself.
//! fallback_report_ids = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HidConfig {
    /// Deliver every report with a leading report-ID byte, inserting `0` for
    /// devices without report IDs. The expected report lengths of every
    /// [`DeviceVariant`](crate::variant::DeviceVariant) assume this framing.
    pub report_id_prefix: bool,

    /// Input report length (including the report-ID byte) to use when the
    /// report descriptor cannot be read. `None` makes that a hard error.
    pub fallback_input_len: Option<usize>,

    /// Whether to treat a device sized by `fallback_input_len` as using report
    /// IDs. When set, reads pass through as delivered; otherwise a `0`
    /// report-ID byte is inserted under `report_id_prefix`.
    pub fallback_report_ids: bool,
}

impl Default for HidConfig {
    fn default() -> Self {
        Self {
            report_id_prefix: true,
            fallback_input_len: None,
            fallback_report_ids: false,
        }
    }
}

impl HidConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(HidConfig::from_toml_str("").unwrap(), HidConfig::default());
        assert!(HidConfig::default().report_id_prefix);
        assert!(!HidConfig::default().fallback_report_ids);
    }

    #[test]
    fn parses_fields() {
        let cfg = HidConfig::from_toml_str(
            "report_id_prefix = false\nfallback_input_len = 28\nfallback_report_ids = true\n",
        )
        .unwrap();
        assert!(!cfg.report_id_prefix);
        assert_eq!(cfg.fallback_input_len, Some(28));
        assert!(cfg.fallback_report_ids);
    }

    #[test]
    fn rejects_bad_types() {
        let err = HidConfig::from_toml_str("report_id_prefix = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = HidConfig::load("/nonexistent/strumlink.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
