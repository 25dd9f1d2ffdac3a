//! Brew recipes and the start-product command ("Start Product").
//!
//! A recipe is a product code plus named numeric properties; each property is
//! bound to a wire argument slot by the machine model's external catalog (the
//! per-model XML files are downloaded and parsed outside this crate).
//! Range/step validation of values is the catalog's responsibility; the
//! encoder only places values at their slots.

use crate::error::{JuraError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Size of the start-product command on the wire (without the trailing key
/// byte the session appends).
pub const COMMAND_LEN: usize = 15;

// Slot 1 carries the product code; slot 14 is the last byte of the command.
const SLOT_RANGE: std::ops::RangeInclusive<u8> = 1..=14;

/// One named property of a machine model, as supplied by its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductProperty {
    pub name: String,
    /// Wire argument slot the value occupies; the catalogs use 2..=11.
    pub argument_slot: u8,
    pub min: u16,
    pub max: u16,
    pub step: u16,
    /// Optional display names for enumerated values.
    pub value_names: Option<BTreeMap<u16, String>>,
}

impl ProductProperty {
    /// Whether a value lies on the property's range and step grid.
    #[must_use]
    pub fn validate(&self, value: u16) -> bool {
        self.min <= value && value <= self.max && self.step != 0 && value % self.step == 0
    }

    /// Display name of an enumerated value, if the property has a mapping.
    #[must_use]
    pub fn value_name(&self, value: u16) -> Option<&str> {
        self.value_names
            .as_ref()
            .and_then(|names| names.get(&value))
            .map(String::as_str)
    }
}

/// The property set of one machine model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyTable {
    properties: BTreeMap<String, ProductProperty>,
}

impl PropertyTable {
    /// Build a table, rejecting properties bound to slots outside the
    /// command layout.
    pub fn new(properties: impl IntoIterator<Item = ProductProperty>) -> Result<Self> {
        let mut table = BTreeMap::new();
        for property in properties {
            if !SLOT_RANGE.contains(&property.argument_slot) {
                return Err(JuraError::Config(format!(
                    "property '{}' bound to argument slot {} outside {}..={}",
                    property.name,
                    property.argument_slot,
                    SLOT_RANGE.start(),
                    SLOT_RANGE.end()
                )));
            }
            table.insert(property.name.clone(), property);
        }
        Ok(Self { properties: table })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProductProperty> {
        self.properties.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductProperty> {
        self.properties.values()
    }
}

/// A brew recipe: product code plus per-property values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoffeeProduct {
    pub code: u8,
    pub name: String,
    /// Current value per property name; properties absent here encode as 0.
    pub values: BTreeMap<String, u16>,
}

impl CoffeeProduct {
    /// Encode the start-product command: product code at byte 0, each
    /// property's value at `argument_slot - 1`, zero elsewhere.
    ///
    /// The payload cipher and the trailing key byte are applied by the
    /// session at write time, not here.
    pub fn encode(&self, table: &PropertyTable) -> Result<[u8; COMMAND_LEN]> {
        let mut command = [0u8; COMMAND_LEN];
        command[0] = self.code;
        for property in table.iter() {
            let value = self.values.get(&property.name).copied().unwrap_or(0);
            let byte = u8::try_from(value).map_err(|_| {
                JuraError::Config(format!(
                    "value {value} of property '{}' does not fit the single-byte slot",
                    property.name
                ))
            })?;
            command[usize::from(property.argument_slot) - 1] = byte;
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(name: &str, slot: u8) -> ProductProperty {
        ProductProperty {
            name: name.to_string(),
            argument_slot: slot,
            min: 0,
            max: 255,
            step: 1,
            value_names: None,
        }
    }

    #[test]
    fn rejects_slot_outside_command() {
        assert!(PropertyTable::new([property("bogus", 15)]).is_err());
        assert!(PropertyTable::new([property("bogus", 0)]).is_err());
    }

    #[test]
    fn validate_checks_range_and_step() {
        let water = ProductProperty {
            name: "water".to_string(),
            argument_slot: 4,
            min: 25,
            max: 290,
            step: 5,
            value_names: None,
        };
        assert!(water.validate(25));
        assert!(water.validate(290));
        assert!(!water.validate(24));
        assert!(!water.validate(26));
        assert!(!water.validate(295));
    }

    #[test]
    fn value_name_lookup() {
        let strength = ProductProperty {
            name: "strength".to_string(),
            argument_slot: 3,
            min: 1,
            max: 5,
            step: 1,
            value_names: Some(BTreeMap::from([
                (1, "XMild".to_string()),
                (5, "XStrong".to_string()),
            ])),
        };
        assert_eq!(strength.value_name(5), Some("XStrong"));
        assert_eq!(strength.value_name(3), None);
    }

    #[test]
    fn absent_property_value_encodes_zero() {
        let table = PropertyTable::new([property("water", 4)]).unwrap();
        let product = CoffeeProduct {
            code: 0x02,
            name: "Espresso".to_string(),
            values: BTreeMap::new(),
        };
        let command = product.encode(&table).unwrap();
        assert_eq!(command[0], 0x02);
        assert!(command[1..].iter().all(|&b| b == 0));
    }
}
