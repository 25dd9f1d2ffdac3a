//! # Device Session
//!
//! Orchestration core: owns one live connection to one physical machine,
//! sequences all wire operations, runs the periodic keepalive, and
//! implements the two-phase statistics protocol.
//!
//! ## Concurrency
//! All wire operations — foreground calls and the background keepalive —
//! funnel through one `tokio::sync::Mutex` over the transport, so no two
//! GATT operations ever interleave on the wire. `fetch_statistics` holds
//! that lock across its entire command/delay/read sequence so a concurrent
//! caller cannot desynchronize which result belongs to which request.
//!
//! ## Failure semantics
//! Transport faults surface unchanged; nothing here retries.
//! [`JuraError::StatisticsUnavailable`] is an expected, recoverable outcome,
//! distinct from a transport fault. Decode faults propagate and are never
//! swallowed into defaults.

use crate::cipher;
use crate::codec::{
    BrewProgress, CoffeeProduct, DeviceIdentity, PropertyTable, StatisticsCounters, StatusSnapshot,
};
use crate::config::{self, SessionConfig};
use crate::endpoint::{Encoding, Endpoint};
use crate::error::{JuraError, Result};
use crate::transport::Transport;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Which statistics counters to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsMode {
    /// Lifetime counters.
    Total,
    /// Counters since the machine's daily reset.
    Daily,
}

impl StatisticsMode {
    fn selector(self) -> [u8; 4] {
        match self {
            StatisticsMode::Total => config::STATISTICS_SELECT_TOTAL,
            StatisticsMode::Daily => config::STATISTICS_SELECT_DAILY,
        }
    }
}

/// State shared between the session handle and its keepalive task.
struct Shared<T> {
    key: u8,
    config: SessionConfig,
    /// The single serialization point for every wire operation.
    transport: Mutex<T>,
}

impl<T: Transport> Shared<T> {
    /// Apply the per-operation deadline to one transport operation.
    async fn with_deadline<F, O>(&self, operation: F) -> Result<O>
    where
        F: Future<Output = Result<O>>,
    {
        tokio::time::timeout(self.config.timeout, operation)
            .await
            .map_err(|_| JuraError::Timeout)?
    }

    async fn read_locked(&self, transport: &mut T, endpoint: Endpoint) -> Result<Vec<u8>> {
        let raw = self.with_deadline(transport.read(endpoint.uuid())).await?;
        let data = match endpoint.encoding() {
            Encoding::Ciphered => cipher::transform(&raw, self.key),
            Encoding::Plaintext | Encoding::Reserved => raw,
        };
        debug!(endpoint = endpoint.name(), payload = %hex::encode(&data), "read");
        Ok(data)
    }

    async fn write_locked(
        &self,
        transport: &mut T,
        endpoint: Endpoint,
        payload: &[u8],
        prepend_key: bool,
    ) -> Result<()> {
        let mut data = Vec::with_capacity(payload.len() + 1);
        if prepend_key {
            data.push(self.key);
        }
        data.extend_from_slice(payload);
        let wire = match endpoint.encoding() {
            Encoding::Ciphered => cipher::transform(&data, self.key),
            Encoding::Plaintext | Encoding::Reserved => data,
        };
        debug!(endpoint = endpoint.name(), payload = %hex::encode(&wire), "write");
        self.with_deadline(transport.write(endpoint.uuid(), &wire))
            .await
    }

    async fn heartbeat(&self) -> Result<()> {
        let mut transport = self.transport.lock().await;
        self.write_locked(&mut transport, Endpoint::PMode, &config::HEARTBEAT_PAYLOAD, true)
            .await
    }
}

/// One session against one physical machine.
///
/// The key byte is fixed for the session lifetime; it comes from the
/// device's advertisement ([`DeviceSession::key_from_advertisement`]) or is
/// supplied explicitly. Exclusivity per machine is enforced by the
/// underlying transport, not by this layer.
pub struct DeviceSession<T: Transport> {
    shared: Arc<Shared<T>>,
    keepalive: Option<JoinHandle<()>>,
}

impl<T: Transport + 'static> DeviceSession<T> {
    /// Create a session with default timings.
    #[must_use]
    pub fn new(transport: T, key: u8) -> Self {
        Self::with_config(transport, key, SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(transport: T, key: u8, config: SessionConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                key,
                config,
                transport: Mutex::new(transport),
            }),
            keepalive: None,
        }
    }

    /// Derive the pairing key from raw manufacturer-specific advertisement
    /// bytes, which carry the identity layout.
    pub fn key_from_advertisement(data: &[u8]) -> Result<u8> {
        Ok(DeviceIdentity::decode(data)?.key)
    }

    /// The session's cipher key byte.
    #[must_use]
    pub fn key(&self) -> u8 {
        self.shared.key
    }

    /// Connect the transport and start the background keepalive.
    ///
    /// The keepalive writes a heartbeat immediately, then once per
    /// configured period, through the same serialization point as
    /// foreground calls.
    pub async fn open(&mut self) -> Result<()> {
        {
            let mut transport = self.shared.transport.lock().await;
            let timeout = self.shared.config.timeout;
            transport.connect(timeout).await?;
        }

        let shared = Arc::clone(&self.shared);
        self.keepalive = Some(tokio::spawn(async move {
            loop {
                if let Err(err) = shared.heartbeat().await {
                    warn!(error = %err, "keepalive write failed; stopping keepalive");
                    break;
                }
                tokio::time::sleep(shared.config.keepalive_period).await;
            }
        }));
        info!("session open");
        Ok(())
    }

    /// Cancel the keepalive, then disconnect.
    ///
    /// Cancellation is joined before the transport is released: once this
    /// starts, no further keepalive write begins.
    pub async fn close(&mut self) -> Result<()> {
        if let Some(handle) = self.keepalive.take() {
            handle.abort();
            let _ = handle.await;
        }
        let mut transport = self.shared.transport.lock().await;
        transport.disconnect().await?;
        info!("session closed");
        Ok(())
    }

    /// Read an endpoint, deciphering when the catalog marks it ciphered.
    pub async fn read(&self, endpoint: Endpoint) -> Result<Vec<u8>> {
        let mut transport = self.shared.transport.lock().await;
        self.shared.read_locked(&mut transport, endpoint).await
    }

    /// Write an endpoint, optionally prefixing the key byte and ciphering
    /// when the catalog marks it ciphered.
    pub async fn write(&self, endpoint: Endpoint, payload: &[u8], prepend_key: bool) -> Result<()> {
        let mut transport = self.shared.transport.lock().await;
        self.shared
            .write_locked(&mut transport, endpoint, payload, prepend_key)
            .await
    }

    /// The same write the background keepalive issues.
    pub async fn heartbeat(&self) -> Result<()> {
        self.shared.heartbeat().await
    }

    /// Lock the machine's front panel.
    pub async fn lock(&self) -> Result<()> {
        self.write(Endpoint::BaristaMode, &[config::BARISTA_LOCK], true)
            .await
    }

    /// Unlock the machine's front panel.
    pub async fn unlock(&self) -> Result<()> {
        self.write(Endpoint::BaristaMode, &[config::BARISTA_UNLOCK], true)
            .await
    }

    /// Two-phase statistics fetch: selector write, settle delay, status
    /// read, then the counter payload.
    ///
    /// Holds the serialization point across the whole sequence. A sentinel
    /// status byte means the counters are not available yet; no data read
    /// is issued in that case.
    pub async fn fetch_statistics(&self, mode: StatisticsMode) -> Result<StatisticsCounters> {
        let mut transport = self.shared.transport.lock().await;

        self.shared
            .write_locked(
                &mut transport,
                Endpoint::StatisticsCommand,
                &mode.selector(),
                true,
            )
            .await?;
        tokio::time::sleep(self.shared.config.settle_delay).await;

        let status = self
            .shared
            .read_locked(&mut transport, Endpoint::StatisticsCommand)
            .await?;
        let first = *status.first().ok_or_else(|| {
            JuraError::Decode("empty statistics status payload".to_string())
        })?;
        if first == config::STATISTICS_UNAVAILABLE {
            return Err(JuraError::StatisticsUnavailable);
        }

        let data = self
            .shared
            .read_locked(&mut transport, Endpoint::StatisticsData)
            .await?;
        Ok(StatisticsCounters::decode(&data))
    }

    /// Encode and send a brew command.
    ///
    /// The Start Product wire layout places the raw key byte at the *end*
    /// of the command, so the usual key prefix is disabled here.
    pub async fn brew(&self, product: &CoffeeProduct, table: &PropertyTable) -> Result<()> {
        debug!(code = product.code, name = %product.name, "brew");
        let mut payload = product.encode(table)?.to_vec();
        payload.push(self.shared.key);
        self.write(Endpoint::StartProduct, &payload, false).await
    }

    /// Progress snapshot of the running product.
    pub async fn fetch_progress(&self) -> Result<BrewProgress> {
        let payload = self.read(Endpoint::ProductProgress).await?;
        BrewProgress::decode(&payload)
    }

    /// Identity block; always plaintext regardless of catalog defaults.
    pub async fn fetch_identity(&self) -> Result<DeviceIdentity> {
        let payload = self.read(Endpoint::AboutMachine).await?;
        DeviceIdentity::decode(&payload)
    }

    /// Currently active alerts, matched against the model's bit→name table.
    pub async fn fetch_status(
        &self,
        names_by_bit: &BTreeMap<u8, String>,
    ) -> Result<StatusSnapshot> {
        let payload = self.read(Endpoint::MachineStatus).await?;
        StatusSnapshot::decode(&payload, names_by_bit)
    }
}

impl<T: Transport> Drop for DeviceSession<T> {
    fn drop(&mut self) {
        // A dropped session must not keep writing to the device.
        if let Some(handle) = self.keepalive.take() {
            handle.abort();
        }
    }
}
