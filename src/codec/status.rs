//! Alert bitmap ("Machine Status").
//!
//! The machine reports active alerts as a 64-bit bitmap in bytes 1..9 of the
//! deciphered payload, expanded MSB-first per byte. Which bit means what is
//! model-specific and comes from the external product catalog, so the decoder
//! takes the bit→name table as input.

use crate::error::{JuraError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

const BITMAP_RANGE: std::ops::Range<usize> = 1..9;

/// The set of named alerts active at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    /// Active alert names, ordered by bit index.
    pub active: Vec<String>,
}

impl StatusSnapshot {
    /// Decode a deciphered status payload against a bit→name table.
    ///
    /// Bit `i` of the 64-bit window maps to byte `i / 8`, bit `7 - i % 8`
    /// (MSB first). Set bits without a table entry are ignored.
    pub fn decode(payload: &[u8], names_by_bit: &BTreeMap<u8, String>) -> Result<Self> {
        if payload.len() < BITMAP_RANGE.end {
            return Err(JuraError::Decode(format!(
                "status payload too short: {} bytes, need {}",
                payload.len(),
                BITMAP_RANGE.end
            )));
        }
        let bitmap = &payload[BITMAP_RANGE];

        let active = names_by_bit
            .iter()
            .filter(|(&bit, _)| {
                let bit = usize::from(bit);
                bit < 64 && bitmap[bit / 8] & (0x80 >> (bit % 8)) != 0
            })
            .map(|(_, name)| name.clone())
            .collect();

        Ok(Self { active })
    }
}
