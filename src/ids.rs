//! USB vendor and product IDs of supported guitar controllers.
//!
//! Values are grouped by vendor. A product ID only has meaning together with
//! its vendor ID; see [`classify`](crate::classify::classify) for the rules that
//! combine them.

/// pid.codes shared VID, used by Santroller firmware.
pub const VENDOR_PID_CODES: u16 = 0x1209;
/// Santroller guitar (all modes share one PID; the mode lives in the revision).
pub const PRODUCT_SANTROLLER: u16 = 0x2882;
/// Santroller revision high byte for Guitar Hero guitar mode.
pub const SANTROLLER_MODE_GH: u8 = 0x03;
/// Santroller revision high byte for Rock Band guitar mode.
pub const SANTROLLER_MODE_RB: u8 = 0x04;

/// Sony Computer Entertainment America, used by licensed PS3 instruments.
pub const VENDOR_SONY_PS3: u16 = 0x12BA;
/// PS3 Guitar Hero guitars.
pub const PRODUCT_PS3_GH: u16 = 0x0100;
/// PS3 Rock Band guitars.
pub const PRODUCT_PS3_RB: u16 = 0x0200;

/// Harmonix/MadCatz legacy VID.
pub const VENDOR_MADCATZ_LEGACY: u16 = 0x1BAD;
/// Wii Rock Band 1 guitar.
pub const PRODUCT_WII_RB1: u16 = 0x0004;
/// Wii Rock Band 2/3 guitar.
pub const PRODUCT_WII_RB2: u16 = 0x3010;

/// MadCatz VID.
pub const VENDOR_MADCATZ: u16 = 0x0738;
/// PS4 Rock Band 4 Stratocaster.
pub const PRODUCT_PS4_STRATOCASTER: u16 = 0x8261;

/// PDP VID.
pub const VENDOR_PDP: u16 = 0x0E6F;
/// PS4 Rock Band 4 Jaguar.
pub const PRODUCT_PS4_JAGUAR: u16 = 0x0173;
/// PS4 Riffmaster.
pub const PRODUCT_PS4_RIFFMASTER: u16 = 0x024A;
/// PS5 Riffmaster.
pub const PRODUCT_PS5_RIFFMASTER: u16 = 0x0249;

/// Raphnet Technologies VID.
pub const VENDOR_RAPHNET: u16 = 0x289B;
/// Raphnet Wii extension adapter (Guitar Hero guitar attached).
pub const PRODUCT_RAPHNET_WII: u16 = 0x0080;
