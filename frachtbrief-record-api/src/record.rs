//! This module contains the records tracked by the network: contracts,
//! shipments and the participating parties.

use crate::transaction::{AccelerationReading, GpsReading, TemperatureReading};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get a reference to a binary representation.
            #[must_use]
            pub fn as_bytes(&self) -> &[u8] {
                self.0.as_bytes()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

record_id!(
    /// The unique identifier of a `Contract`.
    ContractId
);
record_id!(
    /// The unique identifier of a `Shipment`.
    ShipmentId
);
record_id!(
    /// The unique identifier of an `Importer`.
    ImporterId
);
record_id!(
    /// The unique identifier of an `Exporter`.
    ExporterId
);
record_id!(
    /// The unique identifier of a `Shipper`.
    ShipperId
);

/// A `Contract` fixes the conditions a shipment must be carried under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// The contract's identifier.
    pub id: ContractId,

    /// Upper bound for the component sum of an acceleration reading.
    pub maximum_acceleration: f64,

    /// Lower bound for a temperature reading.
    pub minimum_temperature: f64,

    /// Upper bound for a temperature reading.
    pub maximum_temperature: f64,

    /// Price paid per shipped unit.
    pub unit_price: f64,

    /// Deadline after which the payout is forfeited.
    pub arrival_date_time: DateTime<Utc>,

    /// The importer receiving the shipment.
    pub importer: ImporterId,

    /// The exporter sending the shipment.
    pub exporter: ExporterId,

    /// The shipper carrying the shipment.
    pub shipper: ShipperId,
}

/// A `Shipment` collects all sensor readings received while under way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// The shipment's identifier.
    pub id: ShipmentId,

    /// The contract this shipment is carried under.
    pub contract: ContractId,

    /// Number of shipped units.
    pub unit_count: u32,

    /// The shipment's current status. (Default `Created`).
    #[serde(default)]
    pub status: ShipmentStatus,

    /// Optimistic-update counter, managed by the record store.
    #[serde(default)]
    pub revision: u64,

    /// All acceleration readings received so far, in receipt order.
    #[serde(default)]
    pub acceleration_readings: Vec<AccelerationReading>,

    /// All temperature readings received so far, in receipt order.
    #[serde(default)]
    pub temperature_readings: Vec<TemperatureReading>,

    /// All GPS readings received so far, in receipt order.
    #[serde(default)]
    pub gps_readings: Vec<GpsReading>,
}

/// The status of a `Shipment`.
///
/// The only transition performed by transaction processing is to `Arrived`;
/// there is no way back from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// The shipment was provisioned but has not left yet.
    Created,
    /// The shipment is under way.
    InTransit,
    /// The shipment was received by the importer.
    Arrived,
}

impl Default for ShipmentStatus {
    fn default() -> Self {
        Self::Created
    }
}

/// The party receiving a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Importer {
    /// The importer's identifier.
    pub id: ImporterId,

    /// The importer's address, provisioned as the exact concatenation a
    /// matching GPS reading produces.
    pub address: String,
}

/// The party sending a shipment. Provisioned but not read by any handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exporter {
    /// The exporter's identifier.
    pub id: ExporterId,

    /// The exporter's address.
    pub address: String,
}

/// The party carrying a shipment. Provisioned but not read by any handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipper {
    /// The shipper's identifier.
    pub id: ShipperId,

    /// The shipper's address.
    pub address: String,
}
