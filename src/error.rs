//! Error types.

use crate::classify::UsbIds;
use crate::variant::DeviceVariant;
use thiserror::Error;

/// Errors surfaced by [`InstrumentDevice`](crate::device::InstrumentDevice) operations.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The device did not match any known model.
    #[error("unsupported device {ids}")]
    UnsupportedDevice { ids: UsbIds },

    #[error("failed to open {device}: {source}")]
    OpenFailed {
        device: String,
        #[source]
        source: TransportError,
    },

    #[error("failed to read report from {device}: {source}")]
    ReadFailed {
        device: String,
        #[source]
        source: TransportError,
    },

    /// The transport's input reports are shorter than the model requires.
    #[error("{variant} read length ({actual}) is less than expected ({expected})")]
    ReportLengthMismatch {
        variant: DeviceVariant,
        actual: usize,
        expected: usize,
    },
}

/// Errors from a [`HidTransport`](crate::transport::HidTransport).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HID error: {0}")]
    Hid(String),

    #[error("transport is not open")]
    NotOpen,

    #[error("read buffer is empty")]
    EmptyBuffer,

    #[error("invalid report descriptor: {0}")]
    Descriptor(#[from] DescriptorError),
}

impl From<hidapi::HidError> for TransportError {
    fn from(e: hidapi::HidError) -> Self {
        TransportError::Hid(e.to_string())
    }
}

/// Errors from scanning a HID report descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// An item claims more data bytes than remain in the descriptor.
    #[error("item at offset {offset} is truncated")]
    Truncated { offset: usize },

    /// The input items for one report ID add up to more bits than can be counted.
    #[error("input item at offset {offset} makes the report too large")]
    ReportTooLarge { offset: usize },
}

/// Errors from loading a [`HidConfig`](crate::config::HidConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
