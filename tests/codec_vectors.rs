//! Literal wire vectors for the fixed-layout codecs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use jura_ble::{
    BrewProgress, CoffeeProduct, DeviceIdentity, ProductProperty, ProductionDate, ProgressState,
    PropertyTable,
};
use std::collections::BTreeMap;

#[test]
fn zero_date_decodes_to_epoch() {
    let date = ProductionDate::from_raw(0);
    assert_eq!((date.year, date.month, date.day), (1990, 1, 1));
}

#[test]
fn packed_date_decodes() {
    // year offset 30, month index 4, day index 16 -> 2020-05-17
    let date = ProductionDate::from_raw((30 << 9) | (4 << 5) | 16);
    assert_eq!((date.year, date.month, date.day), (2020, 5, 17));
}

#[test]
fn identity_with_full_optional_tail() {
    let mut data = vec![0u8; 55];
    data[0] = 0x2A;
    data[1] = 1;
    data[2] = 2;
    data[4..6].copy_from_slice(&1234u16.to_le_bytes());
    data[6..8].copy_from_slice(&5678u16.to_le_bytes());
    data[8..10].copy_from_slice(&4242u16.to_le_bytes());
    data[10..12].copy_from_slice(&(((30u16) << 9) | (4 << 5) | 16).to_le_bytes());
    data[15] = 0b0000_0101;
    data[27..35].copy_from_slice(b"BF1.2   ");
    data[35..51].copy_from_slice(b"EF658S_C v2.1   ");
    data[51] = b' ';
    data[52..55].copy_from_slice(&[0x03, 0x02, 0x01]);

    let identity = DeviceIdentity::decode(&data).unwrap();
    assert_eq!(identity.key, 0x2A);
    assert_eq!(identity.blue_frog_major, 1);
    assert_eq!(identity.blue_frog_minor, 2);
    assert_eq!(identity.article_number, 1234);
    assert_eq!(identity.machine_number, 5678);
    assert_eq!(identity.serial_number, 4242);
    assert_eq!(
        (
            identity.production_date.year,
            identity.production_date.month,
            identity.production_date.day
        ),
        (2020, 5, 17)
    );
    assert_eq!(identity.production_date_uchi, ProductionDate::from_raw(0));
    assert_eq!(identity.status_bits, 0b0000_0101);
    assert_eq!(identity.blue_frog_version.as_deref(), Some("BF1.2"));
    assert_eq!(identity.machine_version.as_deref(), Some("EF658S_C v2.1"));
    // Tablet id overlaps the version string by one byte (here 0x20).
    assert_eq!(identity.last_connected_tablet_id, Some(0x0102_0320));
}

#[test]
fn identity_truncated_optional_block() {
    // 30 bytes: the BlueFrog version slice clamps to the buffer end.
    let mut data = vec![0u8; 30];
    data[27..30].copy_from_slice(b"BF1");
    let identity = DeviceIdentity::decode(&data).unwrap();
    assert_eq!(identity.blue_frog_version.as_deref(), Some("BF1"));
    assert_eq!(identity.machine_version, None);
    assert_eq!(identity.last_connected_tablet_id, None);
}

#[test]
fn progress_snapshot_vector() {
    let payload = hex::decode("2a34040404000e0101091211000011000000000000").unwrap();
    let progress = BrewProgress::decode(&payload).unwrap();
    assert_eq!(progress.state, ProgressState::MilkFoamVolume);
    assert_eq!(progress.state.code(), 0x34);
    assert_eq!(progress.product_code, 0x04);
    assert_eq!(progress.coffee_strength, (4, 4));
    assert_eq!(progress.water_volume, (0, 0x0E));
    assert_eq!(progress.milk_time, (1, 1));
    assert_eq!(progress.milk_foam, (9, 0x12));
    assert_eq!(progress.water_temperature, 0x11);
    assert_eq!(progress.pause_time, 0);
    assert_eq!(progress.intake_percentage, 0x11);
    assert!(progress.valid);
}

#[test]
fn progress_terminal_state() {
    let payload =
        hex::decode("2a3e040000000000000000000000000000000000").unwrap();
    let progress = BrewProgress::decode(&payload).unwrap();
    assert_eq!(progress.state, ProgressState::LastProgressState);
}

fn ristretto_table() -> PropertyTable {
    let property = |name: &str, slot: u8, min: u16, max: u16, step: u16| ProductProperty {
        name: name.to_string(),
        argument_slot: slot,
        min,
        max,
        step,
        value_names: None,
    };
    PropertyTable::new([
        property("grinder_ratio", 2, 0, 4, 1),
        property("strength", 3, 1, 5, 1),
        property("water", 4, 25, 290, 5),
        property("milk", 5, 0, 120, 1),
        property("milk_foam", 6, 0, 120, 1),
        property("temperature", 7, 0, 2, 1),
        property("stroke", 8, 0, 1, 1),
    ])
    .unwrap()
}

#[test]
fn start_product_command_vector() {
    let product = CoffeeProduct {
        code: 0x01,
        name: "Ristretto".to_string(),
        values: BTreeMap::from([
            ("grinder_ratio".to_string(), 2),
            ("strength".to_string(), 4),
            ("water".to_string(), 0x19),
            ("milk".to_string(), 1),
            ("milk_foam".to_string(), 0),
            ("temperature".to_string(), 2),
            ("stroke".to_string(), 1),
        ]),
    };
    let command = product.encode(&ristretto_table()).unwrap();
    assert_eq!(
        command.to_vec(),
        hex::decode("010204190100020100000000000000").unwrap()
    );
}

#[test]
fn oversized_property_value_is_rejected() {
    let product = CoffeeProduct {
        code: 0x01,
        name: "Ristretto".to_string(),
        values: BTreeMap::from([("water".to_string(), 290)]),
    };
    assert!(product.encode(&ristretto_table()).is_err());
}
