//! Device variants and their dispatch tables.
//!
//! [`DeviceVariant`] is the closed set of guitar models this crate knows how to
//! handle. Per-variant data (display name, expected report length, GIP
//! converter) is kept in exhaustive `match` tables with no wildcard arm, so a new
//! variant cannot be added without giving it an entry in every table.

use crate::gip::GipConverter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known guitar model, one per vendor/mode combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceVariant {
    /// Identification fields matched no known model.
    Unknown,
    /// Santroller firmware in Rock Band guitar mode.
    SantrollerRb,
    /// Santroller firmware in Guitar Hero guitar mode.
    SantrollerGh,
    WiiRb,
    Ps3Rb,
    Ps3Gh,
    /// PDP Jaguar and PS4 Riffmaster.
    Ps4RbPdp,
    /// MadCatz Stratocaster.
    Ps4RbMadCatz,
    Ps5RbPdp,
    /// Raphnet Wii adapter with a Guitar Hero guitar attached.
    RaphnetGh,
}

impl DeviceVariant {
    /// Every variant except [`DeviceVariant::Unknown`].
    pub const KNOWN: [DeviceVariant; 9] = [
        DeviceVariant::SantrollerRb,
        DeviceVariant::SantrollerGh,
        DeviceVariant::WiiRb,
        DeviceVariant::Ps3Rb,
        DeviceVariant::Ps3Gh,
        DeviceVariant::Ps4RbPdp,
        DeviceVariant::Ps4RbMadCatz,
        DeviceVariant::Ps5RbPdp,
        DeviceVariant::RaphnetGh,
    ];

    #[inline]
    pub fn is_known(self) -> bool {
        self != DeviceVariant::Unknown
    }

    /// Short identifier used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            DeviceVariant::Unknown => "Unknown",
            DeviceVariant::SantrollerRb => "Santroller_RB",
            DeviceVariant::SantrollerGh => "Santroller_GH",
            DeviceVariant::WiiRb => "Wii_RB",
            DeviceVariant::Ps3Rb => "PS3_RB",
            DeviceVariant::Ps3Gh => "PS3_GH",
            DeviceVariant::Ps4RbPdp => "PS4_RB_PDP",
            DeviceVariant::Ps4RbMadCatz => "PS4_RB_MadCatz",
            DeviceVariant::Ps5RbPdp => "PS5_RB_PDP",
            DeviceVariant::RaphnetGh => "Raphnet_GH",
        }
    }

    /// User-facing product name, or `None` for [`DeviceVariant::Unknown`].
    pub fn display_name(self) -> Option<&'static str> {
        Some(match self {
            DeviceVariant::Unknown => return None,
            DeviceVariant::WiiRb => "Wii Rock Band Guitar",
            DeviceVariant::Ps3Rb => "PS3 Rock Band Guitar",
            DeviceVariant::Ps3Gh => "PS3 Guitar Hero Guitar",
            DeviceVariant::Ps4RbMadCatz => "PS4 Stratocaster",
            DeviceVariant::Ps4RbPdp => "PS4 Jaguar/Riffmaster",
            DeviceVariant::Ps5RbPdp => "PS5 Riffmaster",
            DeviceVariant::SantrollerRb | DeviceVariant::SantrollerGh => "Santroller Guitar",
            DeviceVariant::RaphnetGh => "Raphnet Wii Adapter",
        })
    }

    /// Minimum input report length in bytes, including the report-ID byte.
    ///
    /// `None` only for [`DeviceVariant::Unknown`].
    pub fn expected_report_len(self) -> Option<usize> {
        Some(match self {
            DeviceVariant::Unknown => return None,
            DeviceVariant::WiiRb | DeviceVariant::Ps3Rb => 28,
            DeviceVariant::Ps3Gh => 28,
            DeviceVariant::Ps4RbPdp | DeviceVariant::Ps4RbMadCatz => 64,
            DeviceVariant::Ps5RbPdp => 64,
            DeviceVariant::SantrollerRb => 7,
            DeviceVariant::SantrollerGh => 7,
            DeviceVariant::RaphnetGh => 15,
        })
    }

    /// Translation routine for this variant's reports.
    ///
    /// `None` only for [`DeviceVariant::Unknown`].
    pub fn gip_converter(self) -> Option<GipConverter> {
        Some(match self {
            DeviceVariant::Unknown => return None,
            DeviceVariant::WiiRb | DeviceVariant::Ps3Rb => GipConverter::Ps3WiiRb,
            DeviceVariant::Ps3Gh => GipConverter::Ps3Gh,
            DeviceVariant::Ps4RbPdp | DeviceVariant::Ps4RbMadCatz => GipConverter::Ps4Rb,
            DeviceVariant::Ps5RbPdp => GipConverter::Ps5Rb,
            DeviceVariant::SantrollerRb => GipConverter::SantrollerRb,
            DeviceVariant::SantrollerGh => GipConverter::SantrollerGh,
            DeviceVariant::RaphnetGh => GipConverter::RaphnetGh,
        })
    }
}

impl fmt::Display for DeviceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
