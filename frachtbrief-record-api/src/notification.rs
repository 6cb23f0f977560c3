//! This module contains the notifications raised during transaction
//! processing. Notifications are emitted once and never persisted.

use crate::record::ShipmentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the notifications raised by the shipment event processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    /// An acceleration reading exceeded the contractual bound.
    AccelerationThreshold(AccelerationThreshold),

    /// A temperature reading left the contractual bounds.
    TemperatureThreshold(TemperatureThreshold),

    /// A GPS reading matched the importer's address.
    ShipmentInPort(ShipmentInPort),
}

impl Notification {
    /// The shipment this notification was raised for.
    #[must_use]
    pub const fn shipment(&self) -> &ShipmentId {
        match self {
            Self::AccelerationThreshold(event) => &event.shipment,
            Self::TemperatureThreshold(event) => &event.shipment,
            Self::ShipmentInPort(event) => &event.shipment,
        }
    }

    /// The human-readable message carried by this notification.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::AccelerationThreshold(event) => &event.message,
            Self::TemperatureThreshold(event) => &event.message,
            Self::ShipmentInPort(event) => &event.message,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.shipment(), self.message())
    }
}

/// Raised when the component sum of an acceleration reading exceeds the
/// contract's `maximum_acceleration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccelerationThreshold {
    /// Acceleration along the X axis, echoed from the reading.
    pub acceleration_x: f64,

    /// Acceleration along the Y axis, echoed from the reading.
    pub acceleration_y: f64,

    /// Acceleration along the Z axis, echoed from the reading.
    pub acceleration_z: f64,

    /// Latitude at reading time.
    pub latitude: f64,

    /// Longitude at reading time.
    pub longitude: f64,

    /// When the reading was taken, or the `"No Input"` sentinel.
    pub reading_time: String,

    /// Human-readable description.
    pub message: String,

    /// The shipment the reading was taken on.
    pub shipment: ShipmentId,
}

/// Raised when a temperature reading leaves the contractual bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureThreshold {
    /// The measured temperature, echoed from the reading.
    pub temperature: f64,

    /// Latitude at reading time.
    pub latitude: f64,

    /// Longitude at reading time.
    pub longitude: f64,

    /// When the reading was taken.
    pub reading_time: String,

    /// Human-readable description.
    pub message: String,

    /// The shipment the reading was taken on.
    pub shipment: ShipmentId,
}

/// Raised when a GPS reading matches the importer's address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentInPort {
    /// Human-readable description, interpolating the importer's address.
    pub message: String,

    /// The shipment that reached the port.
    pub shipment: ShipmentId,
}
