//! # Protocol Constants & Session Configuration
//!
//! Fixed constants of the BlueFrog wire protocol and the tunable timing
//! parameters of a [`DeviceSession`](crate::session::DeviceSession).
//!
//! The wire constants are part of the reverse-engineered device contract and
//! must not be changed; the `SessionConfig` values are the timings the stock
//! JURA app uses and are safe defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Payload of the keepalive/heartbeat write to the P Mode endpoint
/// (key-prefixed and ciphered by the session before it hits the wire).
pub const HEARTBEAT_PAYLOAD: [u8; 2] = [0x7F, 0x80];

/// Selector command for the "overall" statistics counters.
pub const STATISTICS_SELECT_TOTAL: [u8; 4] = [0x00, 0x01, 0xFF, 0xFF];

/// Selector command for the "today" statistics counters.
pub const STATISTICS_SELECT_DAILY: [u8; 4] = [0x00, 0x10, 0xFF, 0xFF];

/// Sentinel status byte the machine reports back on the Statistics Command
/// endpoint while the requested counters are not available.
pub const STATISTICS_UNAVAILABLE: u8 = 0x0E;

/// Barista Mode payload that locks the machine's front panel.
pub const BARISTA_LOCK: u8 = 0x01;

/// Barista Mode payload that unlocks the machine's front panel.
pub const BARISTA_UNLOCK: u8 = 0x00;

/// Name fragment JURA machines advertise while discoverable.
pub const ADVERTISED_NAME: &str = "BlueFrog";

/// Default per-operation timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Period of the background keepalive; the machine drops the session if it
/// sees no write for roughly twice this long.
pub const KEEPALIVE_PERIOD: Duration = Duration::from_secs(10);

/// Mandatory wait between a statistics selector write and the result
/// becoming readable.
pub const STATISTICS_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Timing configuration of a device session.
///
/// The timeout governs each individual wire operation; it is not a retry
/// budget — this layer never retries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Deadline applied to every single transport operation.
    pub timeout: Duration,

    /// Interval between background keepalive writes.
    pub keepalive_period: Duration,

    /// Settle delay of the two-phase statistics fetch.
    pub settle_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            keepalive_period: KEEPALIVE_PERIOD,
            settle_delay: STATISTICS_SETTLE_DELAY,
        }
    }
}
