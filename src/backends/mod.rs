//! Transport backends for `strumlink`.
//!
//! Implementations of [`HidTransport`](crate::transport::HidTransport) for
//! concrete HID stacks.
//!
//! # Feature flags
//! - **`hid`**: enables the `hidapi` backend (default).
//! - **`debug-log`**: logs every raw report at `trace` level.

#[cfg(feature = "hid")]
#[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
pub mod hid;
