//! strumlink: guitar controller identification for GIP translation.
//!
//! Identifies HID rhythm-game guitars (Santroller, PS3, Wii, PS4/PS5 Rock Band,
//! Raphnet adapters) from their USB vendor/product/revision, validates their
//! input report size and selects the routine that converts their raw reports
//! into GIP reports.
//!
//! ```no_run
//! use std::sync::Arc;
//! use strumlink::backends::hid::HidApiTransport;
//! use strumlink::{HidConfig, HidInstrument, InstrumentDevice};
//!
//! let api = Arc::new(hidapi::HidApi::new().expect("init hidapi"));
//! let info = api.device_list().next().expect("a HID device").clone();
//! let transport = HidApiTransport::new(api.clone(), &info, HidConfig::default()).expect("read descriptor");
//! let mut guitar = HidInstrument::new(transport);
//! println!("{guitar}");
//! guitar.open().expect("open");
//! let mut report = vec![0u8; guitar.read_len().expect("report length")];
//! guitar.read(&mut report).expect("read");
//! ```

pub mod backends;
pub mod classify;
pub mod config;
pub mod descriptor;
pub mod device;
pub mod error;
pub mod gip;
pub mod ids;
pub mod instrument;
pub mod metadata;
pub mod transport;
pub mod variant;

pub use classify::{classify, UsbIds};
pub use config::HidConfig;
pub use device::InstrumentDevice;
pub use error::{ConfigError, DescriptorError, DeviceError, TransportError};
pub use gip::{GipConverter, ToGip};
pub use instrument::HidInstrument;
pub use metadata::InstrumentInfo;
pub use transport::HidTransport;
pub use variant::DeviceVariant;
