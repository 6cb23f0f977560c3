//! This module contains the inbound transaction payloads. Once processed,
//! each reading is appended verbatim to its shipment's history.

use crate::record::ShipmentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the inbound transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transaction {
    /// An acceleration sensor reading.
    AccelerationReading(AccelerationReading),

    /// A temperature sensor reading.
    TemperatureReading(TemperatureReading),

    /// A GPS position reading.
    GpsReading(GpsReading),

    /// The importer confirmed receiving the shipment.
    ShipmentReceived(ShipmentReceived),
}

impl Transaction {
    /// The shipment this transaction belongs to.
    #[must_use]
    pub const fn shipment(&self) -> &ShipmentId {
        match self {
            Self::AccelerationReading(tx) => &tx.shipment,
            Self::TemperatureReading(tx) => &tx.shipment,
            Self::GpsReading(tx) => &tx.shipment,
            Self::ShipmentReceived(tx) => &tx.shipment,
        }
    }
}

/// An acceleration reading from the shipment's motion sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccelerationReading {
    /// The shipment the reading was taken on.
    pub shipment: ShipmentId,

    /// Acceleration along the X axis.
    pub acceleration_x: f64,

    /// Acceleration along the Y axis.
    pub acceleration_y: f64,

    /// Acceleration along the Z axis.
    pub acceleration_z: f64,

    /// Latitude at reading time.
    pub latitude: f64,

    /// Longitude at reading time.
    pub longitude: f64,

    /// When the reading was taken. Some sensors do not report this.
    #[serde(default)]
    pub reading_time: Option<String>,
}

/// A temperature reading from the shipment's climate sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// The shipment the reading was taken on.
    pub shipment: ShipmentId,

    /// The measured temperature in degrees Celsius.
    ///
    /// The field name keeps the spelling of the deployed network model.
    pub celcius: f64,

    /// Latitude at reading time.
    pub latitude: f64,

    /// Longitude at reading time.
    pub longitude: f64,

    /// When the reading was taken.
    pub reading_time: String,
}

/// A GPS position reading.
///
/// Latitude and longitude are carried as strings because the in-port check
/// compares their exact concatenation against the importer's address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpsReading {
    /// The shipment the reading was taken on.
    pub shipment: ShipmentId,

    /// Latitude at reading time.
    pub latitude: String,

    /// Longitude at reading time.
    pub longitude: String,

    /// Hemisphere of the latitude.
    pub latitude_direction: CompassDirection,

    /// Hemisphere of the longitude.
    pub longitude_direction: CompassDirection,

    /// When the reading was taken.
    pub reading_time: String,
}

/// The importer confirmed receiving the shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentReceived {
    /// The shipment that was received.
    pub shipment: ShipmentId,
}

/// A compass direction as reported by the GPS sensor.
///
/// # Example
/// ```
/// use frachtbrief_record_api::transaction::CompassDirection;
///
/// assert_eq!(CompassDirection::N.to_string(), "N");
/// assert_eq!(CompassDirection::W.to_string(), "W");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassDirection {
    /// North.
    N,
    /// South.
    S,
    /// East.
    E,
    /// West.
    W,
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let direction = match self {
            Self::N => "N",
            Self::S => "S",
            Self::E => "E",
            Self::W => "W",
        };
        f.write_str(direction)
    }
}
