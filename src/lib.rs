//! # jura-ble
//!
//! Async client for the reverse-engineered JURA "BlueFrog" Bluetooth
//! Low-Energy protocol, used by a line of automated coffee machines to
//! expose status, statistics, and brew control over a fixed set of GATT
//! characteristics.
//!
//! ## Components
//! - **cipher**: the proprietary keyed nibble-substitution involution
//!   protecting most payloads
//! - **endpoint**: the closed catalog of the 12 protocol characteristics
//! - **codec**: fixed-layout decoders/encoders for identity, status,
//!   progress, statistics, and brew commands
//! - **transport**: the GATT seam (btleplug in production, mocks in tests)
//! - **session**: the orchestration core — sequencing, keepalive, and the
//!   two-phase statistics fetch
//!
//! ## Usage
//! ```no_run
//! use jura_ble::{DeviceSession, GattTransport, StatisticsMode};
//! use jura_ble::transport::ble;
//! use std::time::Duration;
//!
//! # async fn run() -> jura_ble::Result<()> {
//! let peripheral = ble::discover(None, Duration::from_secs(5)).await?;
//! let key = ble::advertisement_key(&peripheral).await?;
//!
//! let mut session = DeviceSession::new(GattTransport::new(peripheral), key);
//! session.open().await?;
//!
//! let identity = session.fetch_identity().await?;
//! let counters = session.fetch_statistics(StatisticsMode::Total).await?;
//!
//! session.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Model-specific data — brewable products, property ranges, alert bit
//! names — comes from the per-model catalog XML files and is supplied by
//! the caller; this crate neither downloads nor parses them.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod session;
pub mod transport;

pub use codec::{
    BrewProgress, CoffeeProduct, DeviceIdentity, ProductProperty, ProductionDate, ProgressState,
    PropertyTable, StatisticsCounters, StatusSnapshot,
};
pub use config::SessionConfig;
pub use endpoint::{Encoding, Endpoint};
pub use error::{JuraError, Result};
pub use session::{DeviceSession, StatisticsMode};
pub use transport::{GattTransport, Transport};
