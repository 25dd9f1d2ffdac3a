//! Device identity block ("About Machine").
//!
//! The only always-plaintext payload of the protocol. Newer firmware appends
//! optional fields; the wire format is simply longer, so each optional block
//! is guarded by a length predicate and absence is not an error.

use crate::error::{JuraError, Result};
use serde::Serialize;

/// Production date packed into 16 bits: day in bits 0..5, month in bits
/// 5..9, year offset from 1990 in bits 9..16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductionDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl ProductionDate {
    /// Unpack a raw little-endian date value. Raw `0` decodes to 1990-01-01.
    #[must_use]
    pub fn from_raw(raw: u16) -> Self {
        Self {
            year: ((raw & 0xFE00) >> 9) + 1990,
            month: (((raw & 0x01E0) >> 5) + 1) as u8,
            day: ((raw & 0x001F) + 1) as u8,
        }
    }
}

/// Decoded identity of a machine.
///
/// Also decodes the manufacturer-specific advertisement payload, which uses
/// the same layout; that is how the pairing key is obtained before a
/// connection exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceIdentity {
    /// Per-device cipher key byte.
    pub key: u8,
    /// BlueFrog module firmware version, major byte.
    pub blue_frog_major: u8,
    /// BlueFrog module firmware version, minor byte.
    pub blue_frog_minor: u8,
    pub article_number: u16,
    pub machine_number: u16,
    pub serial_number: u16,
    pub production_date: ProductionDate,
    /// Second packed date; meaning not fully reverse-engineered upstream.
    pub production_date_uchi: ProductionDate,
    pub status_bits: u8,
    /// ASCII BlueFrog version string, present on newer firmware only.
    pub blue_frog_version: Option<String>,
    /// ASCII coffee-machine version string, present on newer firmware only.
    pub machine_version: Option<String>,
    /// Identifier of the tablet last paired with the machine.
    pub last_connected_tablet_id: Option<u32>,
}

const MANDATORY_LEN: usize = 16;

impl DeviceIdentity {
    /// Decode an identity block.
    ///
    /// Fails only when a mandatory offset is out of range or an optional
    /// version string is not ASCII; a short buffer merely omits the
    /// optional tail.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < MANDATORY_LEN {
            return Err(JuraError::Decode(format!(
                "identity block too short: {} bytes, need {MANDATORY_LEN}",
                data.len()
            )));
        }

        let u16_le = |at: usize| u16::from_le_bytes([data[at], data[at + 1]]);

        let blue_frog_version = if data.len() > 27 {
            Some(ascii_trimmed(&data[27..data.len().min(35)])?)
        } else {
            None
        };
        let machine_version = if data.len() > 35 {
            Some(ascii_trimmed(&data[35..data.len().min(52)])?)
        } else {
            None
        };
        // The tablet id overlaps the version string by one byte; that quirk
        // is part of the observed wire format.
        let last_connected_tablet_id = if data.len() > 51 {
            Some(
                data[51..data.len().min(55)]
                    .iter()
                    .rev()
                    .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)),
            )
        } else {
            None
        };

        Ok(Self {
            key: data[0],
            blue_frog_major: data[1],
            blue_frog_minor: data[2],
            article_number: u16_le(4),
            machine_number: u16_le(6),
            serial_number: u16_le(8),
            production_date: ProductionDate::from_raw(u16_le(10)),
            production_date_uchi: ProductionDate::from_raw(u16_le(12)),
            status_bits: data[15],
            blue_frog_version,
            machine_version,
            last_connected_tablet_id,
        })
    }
}

fn ascii_trimmed(bytes: &[u8]) -> Result<String> {
    if !bytes.is_ascii() {
        return Err(JuraError::Decode(
            "identity version string is not ASCII".to_string(),
        ));
    }
    let s = std::str::from_utf8(bytes)
        .map_err(|e| JuraError::Decode(format!("identity version string: {e}")))?;
    Ok(s.trim().to_string())
}
