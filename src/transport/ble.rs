//! btleplug-backed GATT transport and discovery helpers.
//!
//! Discovery is deliberately thin: JURA machines advertise a name containing
//! "BlueFrog", and their manufacturer-specific advertisement bytes carry the
//! same identity layout as the About Machine endpoint, which is how the
//! pairing key is obtained before any connection exists.

use crate::codec::DeviceIdentity;
use crate::config::ADVERTISED_NAME;
use crate::error::{JuraError, Result};
use async_trait::async_trait;
use btleplug::api::{Central, Characteristic, Manager as _, Peripheral as _, ScanFilter, WriteType};
use btleplug::platform::{Adapter, Manager, Peripheral};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// GATT connection to one physical machine.
pub struct GattTransport {
    peripheral: Peripheral,
    characteristics: HashMap<Uuid, Characteristic>,
}

impl GattTransport {
    #[must_use]
    pub fn new(peripheral: Peripheral) -> Self {
        Self {
            peripheral,
            characteristics: HashMap::new(),
        }
    }

    fn characteristic(&self, uuid: Uuid) -> Result<&Characteristic> {
        self.characteristics.get(&uuid).ok_or_else(|| {
            JuraError::Transport(format!("characteristic {uuid} not exposed by device"))
        })
    }
}

#[async_trait]
impl super::Transport for GattTransport {
    async fn connect(&mut self, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, self.peripheral.connect())
            .await
            .map_err(|_| JuraError::Timeout)??;
        self.peripheral.discover_services().await?;
        self.characteristics = self
            .peripheral
            .characteristics()
            .into_iter()
            .map(|c| (c.uuid, c))
            .collect();
        info!(
            address = %self.peripheral.address(),
            characteristics = self.characteristics.len(),
            "connected"
        );
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.peripheral.disconnect().await?;
        info!(address = %self.peripheral.address(), "disconnected");
        Ok(())
    }

    async fn read(&mut self, characteristic: Uuid) -> Result<Vec<u8>> {
        let characteristic = self.characteristic(characteristic)?;
        Ok(self.peripheral.read(characteristic).await?)
    }

    async fn write(&mut self, characteristic: Uuid, payload: &[u8]) -> Result<()> {
        let characteristic = self.characteristic(characteristic)?;
        Ok(self
            .peripheral
            .write(characteristic, payload, WriteType::WithResponse)
            .await?)
    }
}

/// Get the host's default Bluetooth adapter.
pub async fn default_adapter() -> Result<Adapter> {
    let manager = Manager::new().await?;
    manager
        .adapters()
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| JuraError::Transport("no Bluetooth adapter found".to_string()))
}

/// Scan for a machine whose advertised name or address contains `target`,
/// or any machine advertising the BlueFrog name when `target` is `None`.
pub async fn discover(target: Option<&str>, scan_duration: Duration) -> Result<Peripheral> {
    let adapter = default_adapter().await?;
    adapter.start_scan(ScanFilter::default()).await?;
    tokio::time::sleep(scan_duration).await;

    let peripherals = adapter.peripherals().await?;
    for peripheral in peripherals {
        if let Some(props) = peripheral.properties().await? {
            let name = props.local_name.unwrap_or_default();
            let address = peripheral.address().to_string();
            let matches = match target {
                Some(t) => name.contains(t) || address.contains(t),
                None => name.contains(ADVERTISED_NAME),
            };
            if matches {
                debug!(name = %name, address = %address, "found machine");
                adapter.stop_scan().await?;
                return Ok(peripheral);
            }
        }
    }

    adapter.stop_scan().await?;
    Err(JuraError::Transport("no JURA BLE device found".to_string()))
}

/// Extract the pairing key from a peripheral's manufacturer-specific
/// advertisement bytes. Runs before any connection exists; needed at most
/// once per pairing.
pub async fn advertisement_key(peripheral: &Peripheral) -> Result<u8> {
    let props = peripheral
        .properties()
        .await?
        .ok_or_else(|| JuraError::Transport("no advertisement data cached".to_string()))?;
    let payload = props
        .manufacturer_data
        .values()
        .next()
        .ok_or_else(|| JuraError::Transport("advertisement has no manufacturer data".to_string()))?;
    Ok(DeviceIdentity::decode(payload)?.key)
}
