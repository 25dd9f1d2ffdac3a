//! # Endpoint Catalog
//!
//! The closed set of GATT characteristics the BlueFrog protocol exposes.
//!
//! The catalog is a compile-time enumeration bound to `(UUID, encoding)`;
//! "unknown characteristic" is not a runtime failure mode of this crate.
//! Two endpoints are reserved: the protocol names them but no operation in
//! this client exercises them.

use uuid::Uuid;

/// Whether payloads on an endpoint pass through the payload cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Payloads are ciphered under the session key.
    Ciphered,
    /// Payloads travel as-is.
    Plaintext,
    /// Referenced by the protocol but not exercised by any operation here;
    /// treated as plaintext if touched directly.
    Reserved,
}

/// One of the twelve GATT characteristics of the BlueFrog protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Device identity block; the only endpoint that is always plaintext.
    AboutMachine,
    /// Alert bitmap.
    MachineStatus,
    /// Front-panel lock control.
    BaristaMode,
    /// Progress snapshot of the running product.
    ProductProgress,
    /// Keepalive target.
    PMode,
    PModeRead,
    /// Brew command sink.
    StartProduct,
    /// Statistics selector and availability status.
    StatisticsCommand,
    /// Statistics counter payload.
    StatisticsData,
    UpdateProductStatistics,
    UartTx,
    UartRx,
}

impl Endpoint {
    /// Every endpoint of the closed catalog.
    pub const ALL: [Endpoint; 12] = [
        Endpoint::AboutMachine,
        Endpoint::MachineStatus,
        Endpoint::BaristaMode,
        Endpoint::ProductProgress,
        Endpoint::PMode,
        Endpoint::PModeRead,
        Endpoint::StartProduct,
        Endpoint::StatisticsCommand,
        Endpoint::StatisticsData,
        Endpoint::UpdateProductStatistics,
        Endpoint::UartTx,
        Endpoint::UartRx,
    ];

    /// 128-bit characteristic UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        match self {
            Endpoint::AboutMachine => Uuid::from_u128(0x5a401531_ab2e_2548_c435_08c300000710),
            Endpoint::MachineStatus => Uuid::from_u128(0x5a401524_ab2e_2548_c435_08c300000710),
            Endpoint::BaristaMode => Uuid::from_u128(0x5a401530_ab2e_2548_c435_08c300000710),
            Endpoint::ProductProgress => Uuid::from_u128(0x5a401527_ab2e_2548_c435_08c300000710),
            Endpoint::PMode => Uuid::from_u128(0x5a401529_ab2e_2548_c435_08c300000710),
            Endpoint::PModeRead => Uuid::from_u128(0x5a401538_ab2e_2548_c435_08c300000710),
            Endpoint::StartProduct => Uuid::from_u128(0x5a401525_ab2e_2548_c435_08c300000710),
            Endpoint::StatisticsCommand => Uuid::from_u128(0x5a401533_ab2e_2548_c435_08c300000710),
            Endpoint::StatisticsData => Uuid::from_u128(0x5a401534_ab2e_2548_c435_08c300000710),
            Endpoint::UpdateProductStatistics => {
                Uuid::from_u128(0x5a401528_ab2e_2548_c435_08c300000710)
            }
            Endpoint::UartTx => Uuid::from_u128(0x5a401624_ab2e_2548_c435_08c300000710),
            Endpoint::UartRx => Uuid::from_u128(0x5a401625_ab2e_2548_c435_08c300000710),
        }
    }

    /// Cipher requirement of the endpoint.
    #[must_use]
    pub const fn encoding(self) -> Encoding {
        match self {
            Endpoint::AboutMachine => Encoding::Plaintext,
            Endpoint::PModeRead | Endpoint::UpdateProductStatistics => Encoding::Reserved,
            _ => Encoding::Ciphered,
        }
    }

    /// Stable human-readable name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::AboutMachine => "About Machine",
            Endpoint::MachineStatus => "Machine Status",
            Endpoint::BaristaMode => "Barista Mode",
            Endpoint::ProductProgress => "Product Progress",
            Endpoint::PMode => "P Mode",
            Endpoint::PModeRead => "P Mode Read",
            Endpoint::StartProduct => "Start Product",
            Endpoint::StatisticsCommand => "Statistics Command",
            Endpoint::StatisticsData => "Statistics Data",
            Endpoint::UpdateProductStatistics => "Update Product Statistics",
            Endpoint::UartTx => "UART TX",
            Endpoint::UartRx => "UART RX",
        }
    }
}
