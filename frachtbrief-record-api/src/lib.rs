#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! Shared record, transaction and notification types of the `frachtbrief` tracking network.

pub mod notification;
pub mod record;
pub mod transaction;

pub use notification::Notification;
pub use record::{
    Contract, ContractId, Exporter, ExporterId, Importer, ImporterId, Shipment, ShipmentId,
    ShipmentStatus, Shipper, ShipperId,
};
pub use transaction::{
    AccelerationReading, CompassDirection, GpsReading, ShipmentReceived, TemperatureReading,
    Transaction,
};
