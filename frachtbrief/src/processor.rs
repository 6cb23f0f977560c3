//! The transaction handlers applying sensor readings and shipment events to
//! shipment records.

use crate::{
    notification::NotificationSink,
    record_store::{self, RecordStore},
};
use chrono::{DateTime, Utc};
use err_derive::Error;
use frachtbrief_record_api::{
    notification::{AccelerationThreshold, ShipmentInPort, TemperatureThreshold},
    AccelerationReading, Contract, GpsReading, Notification, Shipment, ShipmentReceived,
    ShipmentStatus, TemperatureReading, Transaction,
};
use std::sync::Arc;

/// Sentinel recorded in a threshold notification when the reading carried no
/// timestamp.
pub const NO_READING_TIME: &str = "No Input";

const ACCELERATION_MESSAGE: &str = "Acceleration reading reached threshold";
const TEMPERATURE_MESSAGE: &str = "Temperature reading reached threshold";

/// An error of the `processor` module.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A record could not be read or written.
    #[error(display = "{}", 0)]
    RecordStore(#[error(from)] record_store::Error),
}

/// A `ShipmentEventProcessor` applies inbound transactions to shipment
/// records and raises notifications when contractual bounds are violated.
///
/// Every handler reads the records it needs, optionally emits a notification,
/// appends the payload to the shipment's history and persists the shipment
/// exactly once at the end. Errors from the record store propagate uncaught
/// and abort the transaction.
#[derive(Debug, Clone)]
pub struct ShipmentEventProcessor {
    record_store: Arc<dyn RecordStore>,
    notification_sink: Arc<dyn NotificationSink>,
}

impl ShipmentEventProcessor {
    /// Create a new processor working on the given store and sink.
    #[must_use]
    pub fn new(
        record_store: Arc<dyn RecordStore>,
        notification_sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            record_store,
            notification_sink,
        }
    }

    /// Apply a transaction to its shipment.
    pub fn process(&self, transaction: Transaction) -> Result<(), Error> {
        match transaction {
            Transaction::AccelerationReading(tx) => self.acceleration_reading(tx),
            Transaction::TemperatureReading(tx) => self.temperature_reading(tx),
            Transaction::GpsReading(tx) => self.gps_reading(tx),
            Transaction::ShipmentReceived(tx) => self.shipment_received(&tx),
        }
    }

    /// Handle an acceleration reading.
    ///
    /// Raises an `AccelerationThreshold` notification when the component sum
    /// of the three axes exceeds the contract's `maximum_acceleration`. The
    /// reading is appended to the shipment's history either way.
    pub fn acceleration_reading(&self, tx: AccelerationReading) -> Result<(), Error> {
        let mut shipment = self.record_store.shipment(&tx.shipment)?;
        let contract = self.record_store.contract(&shipment.contract)?;

        // The deployed rule compares the raw component sum, not the euclidean
        // magnitude. Kept as is for compatibility with existing contracts.
        let magnitude = tx.acceleration_x + tx.acceleration_y + tx.acceleration_z;
        if magnitude > contract.maximum_acceleration {
            self.notification_sink
                .emit(Notification::AccelerationThreshold(AccelerationThreshold {
                    acceleration_x: tx.acceleration_x,
                    acceleration_y: tx.acceleration_y,
                    acceleration_z: tx.acceleration_z,
                    latitude: tx.latitude,
                    longitude: tx.longitude,
                    reading_time: tx
                        .reading_time
                        .clone()
                        .unwrap_or_else(|| NO_READING_TIME.to_string()),
                    message: ACCELERATION_MESSAGE.to_string(),
                    shipment: tx.shipment.clone(),
                }));
        }

        shipment.acceleration_readings.push(tx);
        Ok(self.record_store.update_shipment(&shipment)?)
    }

    /// Handle a temperature reading.
    ///
    /// Raises a `TemperatureThreshold` notification when the reading leaves
    /// the contract's temperature bounds. The comparisons are strict: a
    /// reading exactly at a bound is still in range.
    pub fn temperature_reading(&self, tx: TemperatureReading) -> Result<(), Error> {
        let mut shipment = self.record_store.shipment(&tx.shipment)?;
        let contract = self.record_store.contract(&shipment.contract)?;

        if tx.celcius < contract.minimum_temperature || tx.celcius > contract.maximum_temperature {
            self.notification_sink
                .emit(Notification::TemperatureThreshold(TemperatureThreshold {
                    temperature: tx.celcius,
                    latitude: tx.latitude,
                    longitude: tx.longitude,
                    reading_time: tx.reading_time.clone(),
                    message: TEMPERATURE_MESSAGE.to_string(),
                    shipment: tx.shipment.clone(),
                }));
        }

        shipment.temperature_readings.push(tx);
        Ok(self.record_store.update_shipment(&shipment)?)
    }

    /// Handle a GPS reading.
    ///
    /// Raises a `ShipmentInPort` notification when the concatenation of
    /// latitude, longitude and both directions equals the importer's address.
    pub fn gps_reading(&self, tx: GpsReading) -> Result<(), Error> {
        let mut shipment = self.record_store.shipment(&tx.shipment)?;
        let contract = self.record_store.contract(&shipment.contract)?;
        let importer = self.record_store.importer(&contract.importer)?;

        // Field order matters: importer addresses are provisioned as exactly
        // this concatenation.
        let computed_address = format!(
            "{}{}{}{}",
            tx.latitude, tx.longitude, tx.latitude_direction, tx.longitude_direction
        );
        if computed_address == importer.address {
            self.notification_sink
                .emit(Notification::ShipmentInPort(ShipmentInPort {
                    message: format!("Your shipment is in port {}", importer.address),
                    shipment: tx.shipment.clone(),
                }));
        }

        shipment.gps_readings.push(tx);
        Ok(self.record_store.update_shipment(&shipment)?)
    }

    /// Handle a shipment-received event.
    ///
    /// The transition to `Arrived` is unconditional and persisted before the
    /// payout deadline check. The payout has no settlement channel yet and is
    /// only logged.
    pub fn shipment_received(&self, tx: &ShipmentReceived) -> Result<(), Error> {
        let mut shipment = self.record_store.shipment(&tx.shipment)?;
        let contract = self.record_store.contract(&shipment.contract)?;

        shipment.status = ShipmentStatus::Arrived;
        self.record_store.update_shipment(&shipment)?;

        let payout = total_payout(&shipment, &contract, Utc::now());
        log::debug!("Shipment {} arrived, payout would be {}.", shipment.id, payout);
        Ok(())
    }
}

/// Compute the payout for a received shipment.
///
/// The payout is `unit_count * unit_price` from the shipment's contract and
/// is forfeited entirely when `now` is past the contract's arrival deadline.
#[must_use]
pub fn total_payout(shipment: &Shipment, contract: &Contract, now: DateTime<Utc>) -> f64 {
    if now > contract.arrival_date_time {
        0.0
    } else {
        f64::from(shipment.unit_count) * contract.unit_price
    }
}
