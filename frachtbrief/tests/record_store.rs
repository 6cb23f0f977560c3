use frachtbrief::{
    provision::ProvisionData,
    record_store::{Error, RecordStore, SledRecordStore},
};
use frachtbrief_record_api::{ShipmentStatus, TemperatureReading, Transaction};
use std::{env, fs};

const PROVISION_YAML: &str = r#"
importers:
  - id: importer-1
    address: "4074NW"
exporters:
  - id: exporter-1
    address: "Pier 3"
shippers:
  - id: shipper-1
    address: "Meridian Freight Ltd."
contracts:
  - id: contract-1
    maximum_acceleration: 10.0
    minimum_temperature: -5.0
    maximum_temperature: 30.0
    unit_price: 2.5
    arrival_date_time: "2020-09-01T12:00:00Z"
    importer: importer-1
    exporter: exporter-1
    shipper: shipper-1
shipments:
  - id: shipment-1
    contract: contract-1
    unit_count: 4000
    status: in_transit
"#;

fn open_store(name: &str) -> SledRecordStore {
    let path = env::temp_dir().join(format!("frachtbrief-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&path);
    SledRecordStore::new(path.to_str().unwrap()).unwrap()
}

#[test]
fn provisioned_records_read_back() {
    let store = open_store("provision");

    let provision: ProvisionData = serde_yaml::from_str(PROVISION_YAML).unwrap();
    provision.apply(&store).unwrap();

    let contract = store.contract(&"contract-1".into()).unwrap();
    assert_eq!(contract.unit_price, 2.5);
    assert_eq!(contract.importer, "importer-1".into());

    let shipment = store.shipment(&"shipment-1".into()).unwrap();
    assert_eq!(shipment.status, ShipmentStatus::InTransit);
    assert_eq!(shipment.revision, 0);
    assert!(shipment.temperature_readings.is_empty());

    let importer = store.importer(&"importer-1".into()).unwrap();
    assert_eq!(importer.address, "4074NW");
}

#[test]
fn updated_shipment_reads_back_with_bumped_revision() {
    let store = open_store("update");

    let provision: ProvisionData = serde_yaml::from_str(PROVISION_YAML).unwrap();
    provision.apply(&store).unwrap();

    let mut shipment = store.shipment(&"shipment-1".into()).unwrap();
    shipment.temperature_readings.push(TemperatureReading {
        shipment: "shipment-1".into(),
        celcius: 18.0,
        latitude: 30.51,
        longitude: 32.26,
        reading_time: "2020-08-14T13:30:00Z".to_string(),
    });
    store.update_shipment(&shipment).unwrap();

    let stored = store.shipment(&"shipment-1".into()).unwrap();
    assert_eq!(stored.revision, 1);
    assert_eq!(stored.temperature_readings.len(), 1);
    assert_eq!(stored.temperature_readings[0].celcius, 18.0);
}

#[test]
fn stale_revision_is_rejected() {
    let store = open_store("conflict");

    let provision: ProvisionData = serde_yaml::from_str(PROVISION_YAML).unwrap();
    provision.apply(&store).unwrap();

    let stale = store.shipment(&"shipment-1".into()).unwrap();
    store.update_shipment(&stale).unwrap();

    assert!(matches!(
        store.update_shipment(&stale),
        Err(Error::RevisionConflict(_))
    ));
    // The stored record keeps the state of the successful update.
    assert_eq!(store.shipment(&"shipment-1".into()).unwrap().revision, 1);
}

#[test]
fn racing_writers_cannot_lose_an_update() {
    let store = open_store("race");

    let provision: ProvisionData = serde_yaml::from_str(PROVISION_YAML).unwrap();
    provision.apply(&store).unwrap();

    // Two writers fetch the same shipment at revision 0.
    let mut first = store.shipment(&"shipment-1".into()).unwrap();
    let mut second = first.clone();

    first.temperature_readings.push(TemperatureReading {
        shipment: "shipment-1".into(),
        celcius: 18.0,
        latitude: 30.51,
        longitude: 32.26,
        reading_time: "2020-08-14T13:30:00Z".to_string(),
    });
    store.update_shipment(&first).unwrap();

    // The second writer still carries revision 0; its write must not land.
    second.status = ShipmentStatus::Arrived;
    assert!(matches!(
        store.update_shipment(&second),
        Err(Error::RevisionConflict(_))
    ));

    let stored = store.shipment(&"shipment-1".into()).unwrap();
    assert_eq!(stored.revision, 1);
    assert_eq!(stored.temperature_readings.len(), 1);
    assert_eq!(stored.status, ShipmentStatus::InTransit);
}

#[test]
fn feed_transactions_deserialize() {
    let feed = r#"
- acceleration_reading:
    shipment: shipment-1
    acceleration_x: 4.0
    acceleration_y: 4.0
    acceleration_z: 4.0
    latitude: 12.11
    longitude: 65.0
- shipment_received:
    shipment: shipment-1
"#;
    let transactions: Vec<Transaction> = serde_yaml::from_str(feed).unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(*transactions[0].shipment(), "shipment-1".into());
    assert!(matches!(transactions[1], Transaction::ShipmentReceived(_)));
}
