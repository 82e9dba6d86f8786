//! GIP converter selection.
//!
//! Each supported guitar reports its state in a vendor-specific layout. A
//! [`GipConverter`] names the routine that turns one of those raw reports into a
//! GIP report. The routines themselves are supplied by the caller through
//! [`ToGip`]; this crate only picks which one applies to a device.
//!
//! # Example
//! ```
//! use strumlink::gip::{GipConverter, ToGip};
//!
//! struct Passthrough;
//!
//! impl ToGip for Passthrough {
//!     fn ps3_wii_rb(&self, report: &[u8], gip: &mut [u8]) { copy(report, gip) }
//!     fn ps3_gh(&self, report: &[u8], gip: &mut [u8]) { copy(report, gip) }
//!     fn ps4_rb(&self, report: &[u8], gip: &mut [u8]) { copy(report, gip) }
//!     fn ps5_rb(&self, report: &[u8], gip: &mut [u8]) { copy(report, gip) }
//!     fn santroller_rb(&self, report: &[u8], gip: &mut [u8]) { copy(report, gip) }
//!     fn santroller_gh(&self, report: &[u8], gip: &mut [u8]) { copy(report, gip) }
//!     fn raphnet_gh(&self, report: &[u8], gip: &mut [u8]) { copy(report, gip) }
//! }
//!
//! fn copy(report: &[u8], gip: &mut [u8]) {
//!     let n = report.len().min(gip.len());
//!     gip[..n].copy_from_slice(&report[..n]);
//! }
//!
//! let mut gip = [0u8; 4];
//! GipConverter::Ps3Gh.apply(&Passthrough, &[1, 2, 3, 4], &mut gip);
//! assert_eq!(gip, [1, 2, 3, 4]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to one raw-report → GIP translation routine.
///
/// Several device variants can share a routine when their reports use the same
/// layout (for example Wii and PS3 Rock Band guitars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GipConverter {
    /// PS3 and Wii Rock Band guitars.
    Ps3WiiRb,
    /// PS3 Guitar Hero guitars.
    Ps3Gh,
    /// PS4 Rock Band guitars (MadCatz and PDP).
    Ps4Rb,
    /// PS5 Rock Band guitars.
    Ps5Rb,
    SantrollerRb,
    SantrollerGh,
    /// Raphnet Wii adapter with a Guitar Hero guitar.
    RaphnetGh,
}

impl GipConverter {
    /// Every routine, in declaration order.
    pub const ALL: [GipConverter; 7] = [
        GipConverter::Ps3WiiRb,
        GipConverter::Ps3Gh,
        GipConverter::Ps4Rb,
        GipConverter::Ps5Rb,
        GipConverter::SantrollerRb,
        GipConverter::SantrollerGh,
        GipConverter::RaphnetGh,
    ];

    /// Stable identifier, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            GipConverter::Ps3WiiRb => "ps3_wii_rb",
            GipConverter::Ps3Gh => "ps3_gh",
            GipConverter::Ps4Rb => "ps4_rb",
            GipConverter::Ps5Rb => "ps5_rb",
            GipConverter::SantrollerRb => "santroller_rb",
            GipConverter::SantrollerGh => "santroller_gh",
            GipConverter::RaphnetGh => "raphnet_gh",
        }
    }

    /// Run the routine this converter refers to.
    pub fn apply<G: ToGip + ?Sized>(self, to_gip: &G, report: &[u8], gip: &mut [u8]) {
        match self {
            GipConverter::Ps3WiiRb => to_gip.ps3_wii_rb(report, gip),
            GipConverter::Ps3Gh => to_gip.ps3_gh(report, gip),
            GipConverter::Ps4Rb => to_gip.ps4_rb(report, gip),
            GipConverter::Ps5Rb => to_gip.ps5_rb(report, gip),
            GipConverter::SantrollerRb => to_gip.santroller_rb(report, gip),
            GipConverter::SantrollerGh => to_gip.santroller_gh(report, gip),
            GipConverter::RaphnetGh => to_gip.raphnet_gh(report, gip),
        }
    }
}

impl fmt::Display for GipConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of raw-report → GIP translation routines, one per [`GipConverter`].
///
/// `report` is the raw input report exactly as read from the device (including
/// the leading report-ID byte). `gip` is the caller's output buffer.
pub trait ToGip {
    fn ps3_wii_rb(&self, report: &[u8], gip: &mut [u8]);
    fn ps3_gh(&self, report: &[u8], gip: &mut [u8]);
    fn ps4_rb(&self, report: &[u8], gip: &mut [u8]);
    fn ps5_rb(&self, report: &[u8], gip: &mut [u8]);
    fn santroller_rb(&self, report: &[u8], gip: &mut [u8]);
    fn santroller_gh(&self, report: &[u8], gip: &mut [u8]);
    fn raphnet_gh(&self, report: &[u8], gip: &mut [u8]);
}
