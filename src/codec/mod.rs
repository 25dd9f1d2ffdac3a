//! # Wire Codecs
//!
//! Fixed-layout binary decoders/encoders of the BlueFrog protocol.
//!
//! All decoders operate on already-deciphered bytes; the session applies the
//! payload cipher before these run. Decoders are all-or-nothing: either a
//! fully constructed value or a [`JuraError::Decode`](crate::JuraError).
//!
//! ## Components
//! - **identity**: device identity block with version-dependent optional tail
//! - **status**: 64-bit alert bitmap
//! - **progress**: brew-progress snapshot and its state/argument tables
//! - **statistics**: 24-bit big-endian counter groups
//! - **product**: brew recipes and the 15-byte start-product command

pub mod identity;
pub mod product;
pub mod progress;
pub mod statistics;
pub mod status;

pub use identity::{DeviceIdentity, ProductionDate};
pub use product::{CoffeeProduct, ProductProperty, PropertyTable};
pub use progress::{BrewProgress, ProgressState};
pub use statistics::StatisticsCounters;
pub use status::StatusSnapshot;
