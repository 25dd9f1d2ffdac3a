//! Brew-progress snapshot ("Product Progress").
//!
//! Layout after the 1-byte header: state code, product code, then a block of
//! single-byte arguments at fixed indices. The state-code space and several
//! argument slots are incompletely reverse-engineered upstream; unrecognized
//! state codes pass through verbatim rather than being mapped to a default.

use crate::error::{JuraError, Result};
use serde::Serialize;

/// Progress-state code of the running product.
///
/// Codes recovered from the vendor Android app; the set is known to be
/// incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressState {
    SmartAlertPause,
    MilkFoamBeanAmount,
    MilkFoamMilkVolume,
    MilkFoamPause,
    MilkFoamVolume,
    MilkFoamWaterVolume,
    CoffeeBeanAmount,
    CoffeeWaterAmount,
    LastProgressState,
    HotWaterTemperature,
    HotWaterVolume,
    SteamTemperature,
    /// A code outside the recovered set, surfaced unchanged.
    Unrecognized(u8),
}

impl ProgressState {
    /// Map a raw state code.
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            0x19 => ProgressState::SmartAlertPause,
            0x31 => ProgressState::MilkFoamBeanAmount,
            0x32 => ProgressState::MilkFoamMilkVolume,
            0x33 => ProgressState::MilkFoamPause,
            0x34 => ProgressState::MilkFoamVolume,
            0x37 => ProgressState::MilkFoamWaterVolume,
            0x39 => ProgressState::CoffeeBeanAmount,
            0x3C => ProgressState::CoffeeWaterAmount,
            0x3E => ProgressState::LastProgressState,
            0x40 => ProgressState::HotWaterTemperature,
            0x41 => ProgressState::HotWaterVolume,
            0x43 => ProgressState::SteamTemperature,
            other => ProgressState::Unrecognized(other),
        }
    }

    /// Raw wire code of the state.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            ProgressState::SmartAlertPause => 0x19,
            ProgressState::MilkFoamBeanAmount => 0x31,
            ProgressState::MilkFoamMilkVolume => 0x32,
            ProgressState::MilkFoamPause => 0x33,
            ProgressState::MilkFoamVolume => 0x34,
            ProgressState::MilkFoamWaterVolume => 0x37,
            ProgressState::CoffeeBeanAmount => 0x39,
            ProgressState::CoffeeWaterAmount => 0x3C,
            ProgressState::LastProgressState => 0x3E,
            ProgressState::HotWaterTemperature => 0x40,
            ProgressState::HotWaterVolume => 0x41,
            ProgressState::SteamTemperature => 0x43,
            ProgressState::Unrecognized(code) => code,
        }
    }
}

// Argument indices within the argument block, recovered from the vendor app.
const ARG_ACTUAL_COFFEE_STRENGTH: usize = 0;
const ARG_MAX_COFFEE_STRENGTH: usize = 1;
const ARG_ACTUAL_WATER_VOLUME: usize = 2;
const ARG_MAX_WATER_VOLUME: usize = 3;
const ARG_ACTUAL_MILK_TIME: usize = 4;
const ARG_MAX_MILK_TIME: usize = 5;
const ARG_ACTUAL_MILK_FOAM: usize = 6;
const ARG_MAX_MILK_FOAM: usize = 7;
const ARG_MAX_WATER_TEMPERATURE: usize = 8;
const ARG_MAX_PAUSE_TIME: usize = 10;
const ARG_INTAKE_PERCENTAGE: usize = 11;
const ARG_INVALID_FLAG: usize = 13;

const ARGUMENT_OFFSET: usize = 2;
const BODY_LEN: usize = ARGUMENT_OFFSET + ARG_INVALID_FLAG + 1;

/// Snapshot of the running product's progress.
///
/// Paired fields are `(actual, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrewProgress {
    pub state: ProgressState,
    pub product_code: u8,
    pub coffee_strength: (u8, u8),
    pub water_volume: (u8, u8),
    pub milk_time: (u8, u8),
    /// Shared slot: milk-foam time, steam temperature, or bypass water
    /// amount depending on the product.
    pub milk_foam: (u8, u8),
    pub water_temperature: u8,
    pub pause_time: u8,
    pub intake_percentage: u8,
    /// Negation of the raw validity flag (flag set means invalid).
    pub valid: bool,
}

impl BrewProgress {
    /// Decode a deciphered progress payload (header byte included).
    pub fn decode(payload: &[u8]) -> Result<Self> {
        let body = payload
            .get(1..)
            .filter(|body| body.len() >= BODY_LEN)
            .ok_or_else(|| {
                JuraError::Decode(format!(
                    "progress payload too short: {} bytes, need {}",
                    payload.len(),
                    BODY_LEN + 1
                ))
            })?;
        let arg = |index: usize| body[ARGUMENT_OFFSET + index];

        Ok(Self {
            state: ProgressState::from_code(body[0]),
            product_code: body[1],
            coffee_strength: (arg(ARG_ACTUAL_COFFEE_STRENGTH), arg(ARG_MAX_COFFEE_STRENGTH)),
            water_volume: (arg(ARG_ACTUAL_WATER_VOLUME), arg(ARG_MAX_WATER_VOLUME)),
            milk_time: (arg(ARG_ACTUAL_MILK_TIME), arg(ARG_MAX_MILK_TIME)),
            milk_foam: (arg(ARG_ACTUAL_MILK_FOAM), arg(ARG_MAX_MILK_FOAM)),
            water_temperature: arg(ARG_MAX_WATER_TEMPERATURE),
            pause_time: arg(ARG_MAX_PAUSE_TIME),
            intake_percentage: arg(ARG_INTAKE_PERCENTAGE),
            valid: arg(ARG_INVALID_FLAG) == 0,
        })
    }
}
