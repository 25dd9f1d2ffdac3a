//! # Transport Layer
//!
//! The session's seam to the underlying GATT connection.
//!
//! The protocol treats each characteristic as an opaque read/write byte
//! channel; everything a session needs from the platform is behind the
//! [`Transport`] trait, so tests drive the session against an instrumented
//! in-memory transport while production uses the btleplug-backed
//! [`GattTransport`](ble::GattTransport).

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

pub mod ble;

pub use ble::GattTransport;

/// One opaque GATT connection to one peripheral.
///
/// Implementations surface faults as
/// [`JuraError::Transport`](crate::JuraError); they never retry. Callers are
/// responsible for serializing operations — GATT characteristic operations
/// on one peripheral are not safely concurrent.
#[async_trait]
pub trait Transport: Send {
    /// Establish the connection, failing after `timeout`.
    async fn connect(&mut self, timeout: Duration) -> Result<()>;

    /// Tear the connection down.
    async fn disconnect(&mut self) -> Result<()>;

    /// Read the raw value of a characteristic.
    async fn read(&mut self, characteristic: Uuid) -> Result<Vec<u8>>;

    /// Write a raw value to a characteristic.
    async fn write(&mut self, characteristic: Uuid, payload: &[u8]) -> Result<()>;
}
