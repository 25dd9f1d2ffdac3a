//! Statistics counters ("Statistics Data").
//!
//! The payload is an ordered run of unsigned 24-bit big-endian counters, one
//! per consecutive 3-byte group. Which counter belongs to which product is
//! model-specific and outside this crate.

use serde::Serialize;

/// Ordered counter values from one statistics fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsCounters {
    pub counters: Vec<u32>,
}

impl StatisticsCounters {
    /// Decode a deciphered statistics payload. Trailing bytes that do not
    /// form a full 3-byte group are ignored; never fails.
    #[must_use]
    pub fn decode(data: &[u8]) -> Self {
        let counters = data
            .chunks_exact(3)
            .map(|group| {
                (u32::from(group[0]) << 16) | (u32::from(group[1]) << 8) | u32::from(group[2])
            })
            .collect();
        Self { counters }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_big_endian_groups() {
        let stats = StatisticsCounters::decode(&[0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0xFF, 0xFF, 0xFF]);
        assert_eq!(stats.counters, vec![1, 256, 0xFF_FFFF]);
    }

    #[test]
    fn trailing_partial_group_is_ignored() {
        let stats = StatisticsCounters::decode(&[0x00, 0x00, 0x2A, 0x01, 0x02]);
        assert_eq!(stats.counters, vec![0x2A]);
    }

    #[test]
    fn empty_payload_decodes_empty() {
        assert!(StatisticsCounters::decode(&[]).is_empty());
    }
}
