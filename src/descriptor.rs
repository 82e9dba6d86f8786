//! Input report sizing from HID report descriptors.
//!
//! Only the parts of the descriptor that affect input report size are looked
//! at: Report Size, Report Count and Report ID globals, Push/Pop, and Input main
//! items. Everything else (usages, logical ranges, collections) is skipped.
//!
//! Item layout follows the HID 1.11 spec, section 6.2.2:
//! - short items: `prefix = tag(4) | type(2) | size(2)`, size code `3` means 4 bytes
//! - long items: prefix `0xFE`, then a data-size byte and a tag byte

use crate::error::DescriptorError;
use std::collections::BTreeMap;

// Main
const INPUT: u8 = 0x80;
// Global
const REPORT_SIZE: u8 = 0x74;
const REPORT_ID: u8 = 0x84;
const REPORT_COUNT: u8 = 0x94;
const PUSH: u8 = 0xa4;
const POP: u8 = 0xb4;

const LONG_ITEM: u8 = 0b1111_11_10;

/// Shape of a device's input reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputLayout {
    /// Largest input report payload in bytes, excluding any report-ID byte.
    pub report_len: usize,
    /// Whether the descriptor declares report IDs.
    pub uses_report_ids: bool,
}

impl InputLayout {
    /// Bytes per report as seen by a reader.
    ///
    /// With `report_id_prefix` every report carries a leading report-ID byte
    /// (`0` when the device declares none), which is how Windows delivers them.
    /// Without it, the byte is only present when the device uses report IDs.
    pub fn input_len(&self, report_id_prefix: bool) -> usize {
        if report_id_prefix || self.uses_report_ids {
            self.report_len + 1
        } else {
            self.report_len
        }
    }
}

#[derive(Clone, Copy, Default)]
struct Globals {
    report_size: u32,
    report_count: u32,
    report_id: u8,
}

/// Scan `descriptor` and compute the input report layout.
pub fn input_layout(descriptor: &[u8]) -> Result<InputLayout, DescriptorError> {
    let mut globals = Globals::default();
    let mut stack: Vec<Globals> = Vec::new();
    let mut bits_by_id: BTreeMap<u8, u64> = BTreeMap::new();
    let mut uses_report_ids = false;

    let mut offset = 0;
    while offset < descriptor.len() {
        let prefix = descriptor[offset];

        if prefix == LONG_ITEM {
            let size = *descriptor
                .get(offset + 1)
                .ok_or(DescriptorError::Truncated { offset })? as usize;
            let end = offset + 3 + size;
            if end > descriptor.len() {
                return Err(DescriptorError::Truncated { offset });
            }
            offset = end;
            continue;
        }

        let size = (1usize << (prefix & 0b11)) >> 1;
        let tag = prefix & !0b11;
        let data = descriptor
            .get(offset + 1..offset + 1 + size)
            .ok_or(DescriptorError::Truncated { offset })?;
        let value = data
            .iter()
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));

        match tag {
            INPUT => {
                let total = bits_by_id.entry(globals.report_id).or_default();
                let bits = u64::from(globals.report_size)
                    .checked_mul(u64::from(globals.report_count))
                    .and_then(|bits| bits.checked_add(*total))
                    .filter(|&bits| usize::try_from(bits.div_ceil(8)).is_ok())
                    .ok_or(DescriptorError::ReportTooLarge { offset })?;
                *total = bits;
            }
            REPORT_SIZE => globals.report_size = value,
            REPORT_COUNT => globals.report_count = value,
            REPORT_ID => {
                globals.report_id = value as u8;
                uses_report_ids = true;
            }
            PUSH => stack.push(globals),
            POP => {
                if let Some(saved) = stack.pop() {
                    globals = saved;
                }
            }
            _ => {}
        }

        offset += 1 + size;
    }

    let report_len = bits_by_id
        .values()
        .map(|bits| bits.div_ceil(8) as usize)
        .max()
        .unwrap_or(0);

    Ok(InputLayout {
        report_len,
        uses_report_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// QEMU USB tablet: 3 buttons + 5 pad bits, two 16-bit axes, one 8-bit wheel.
    const TABLET: &[u8] = &[
        0x05, 0x01, 0x09, 0x02, 0xa1, 0x01, 0x09, 0x01, 0xa1, 0x00, 0x05, 0x09, 0x19, 0x01, 0x29,
        0x03, 0x15, 0x00, 0x25, 0x01, 0x95, 0x03, 0x75, 0x01, 0x81, 0x02, 0x95, 0x01, 0x75, 0x05,
        0x81, 0x01, 0x05, 0x01, 0x09, 0x30, 0x09, 0x31, 0x15, 0x00, 0x26, 0xff, 0x7f, 0x35, 0x00,
        0x46, 0xff, 0x7f, 0x75, 0x10, 0x95, 0x02, 0x81, 0x02, 0x05, 0x01, 0x09, 0x38, 0x15, 0x81,
        0x25, 0x7f, 0x35, 0x00, 0x45, 0x00, 0x75, 0x08, 0x95, 0x01, 0x81, 0x06, 0xc0, 0xc0,
    ];

    #[test]
    fn tablet_without_report_ids() {
        let layout = input_layout(TABLET).unwrap();
        assert_eq!(
            layout,
            InputLayout {
                report_len: 6,
                uses_report_ids: false,
            }
        );
        assert_eq!(layout.input_len(true), 7);
        assert_eq!(layout.input_len(false), 6);
    }

    #[test]
    fn largest_report_id_wins() {
        let desc = [
            0x85, 0x01, // Report ID 1
            0x75, 0x08, // Report Size 8
            0x95, 0x3F, // Report Count 63
            0x81, 0x02, // Input
            0x85, 0x02, // Report ID 2
            0x95, 0x04, // Report Count 4
            0x81, 0x02, // Input
            0x91, 0x02, // Output (ignored)
        ];
        let layout = input_layout(&desc).unwrap();
        assert!(layout.uses_report_ids);
        assert_eq!(layout.report_len, 63);
        assert_eq!(layout.input_len(false), 64);
        assert_eq!(layout.input_len(true), 64);
    }

    #[test]
    fn partial_bytes_round_up() {
        let desc = [0x75, 0x01, 0x95, 0x0D, 0x81, 0x02];
        assert_eq!(input_layout(&desc).unwrap().report_len, 2);
    }

    #[test]
    fn push_pop_restores_globals() {
        let desc = [
            0x75, 0x08, 0x95, 0x02, // 2 x 8 bits
            0xa4, // Push
            0x75, 0x10, 0x95, 0x01, 0x81, 0x02, // 1 x 16 bits
            0xb4, // Pop
            0x81, 0x02, // 2 x 8 bits
        ];
        assert_eq!(input_layout(&desc).unwrap().report_len, 4);
    }

    #[test]
    fn four_byte_values_and_long_items() {
        let desc = [
            0x77, 0x08, 0x00, 0x00, 0x00, // Report Size 8 (4-byte form)
            0xFE, 0x02, 0x10, 0xAA, 0xBB, // long item, skipped
            0x95, 0x03, 0x81, 0x02,
        ];
        assert_eq!(input_layout(&desc).unwrap().report_len, 3);
    }

    #[test]
    fn truncated_item() {
        let desc = [0x75, 0x08, 0x26, 0xff];
        assert_eq!(
            input_layout(&desc),
            Err(DescriptorError::Truncated { offset: 2 })
        );
        assert_eq!(
            input_layout(&[0xFE, 0x05, 0x10]),
            Err(DescriptorError::Truncated { offset: 0 })
        );
    }

    #[test]
    fn oversized_report_is_rejected() {
        let desc = [
            0x77, 0xFF, 0xFF, 0xFF, 0xFF, // Report Size 0xFFFFFFFF
            0x97, 0xFF, 0xFF, 0xFF, 0xFF, // Report Count 0xFFFFFFFF
            0x81, 0x02, // Input, fits in 64 bits
            0x81, 0x02, // Input, running total overflows
        ];
        assert_eq!(
            input_layout(&desc),
            Err(DescriptorError::ReportTooLarge { offset: 12 })
        );
    }

    #[test]
    fn empty_descriptor() {
        assert_eq!(input_layout(&[]).unwrap(), InputLayout::default());
    }
}
