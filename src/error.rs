//! # Error Types
//!
//! Error taxonomy for the JURA BlueFrog protocol client.
//!
//! ## Error Categories
//! - **Transport errors**: connectivity, rejected reads/writes, timeouts —
//!   surfaced unchanged, never retried internally
//! - **Decode errors**: a mandatory field of a fixed wire layout cannot be
//!   parsed (an *optional* field being absent is not an error)
//! - **Statistics unavailable**: expected business-level outcome signalled by
//!   the machine's sentinel status byte
//! - **Configuration errors**: a value outside the closed protocol catalog,
//!   e.g. a product property bound to an impossible argument slot
//!
//! Decoders are all-or-nothing: a value is either fully constructed or an
//! error is returned; no partially populated value is ever exposed.

use thiserror::Error;

/// Primary error type for all protocol operations.
#[derive(Error, Debug)]
pub enum JuraError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    #[error("decode error: {0}")]
    Decode(String),

    #[error("statistics not available")]
    StatisticsUnavailable,

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<btleplug::Error> for JuraError {
    fn from(err: btleplug::Error) -> Self {
        JuraError::Transport(err.to_string())
    }
}

/// Type alias for Results using JuraError
pub type Result<T> = std::result::Result<T, JuraError>;
