//! Errors raised by record store implementations.

use err_derive::Error;
use frachtbrief_record_api::{ContractId, ImporterId, ShipmentId};

/// An error of the `record_store` module.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The referenced `Contract` was not found.
    #[error(display = "The contract {} was not found.", 0)]
    ContractNotFound(ContractId),

    /// The referenced `Shipment` was not found.
    #[error(display = "The shipment {} was not found.", 0)]
    ShipmentNotFound(ShipmentId),

    /// The referenced `Importer` was not found.
    #[error(display = "The importer {} was not found.", 0)]
    ImporterNotFound(ImporterId),

    /// The `Shipment` was updated concurrently.
    #[error(display = "The shipment {} was updated concurrently.", 0)]
    RevisionConflict(ShipmentId),

    /// The underlying database failed.
    #[error(display = "{}", 0)]
    Sled(#[error(from)] sled::Error),

    /// A record could not be encoded or decoded.
    #[error(display = "{}", 0)]
    Encoding(#[error(from)] postcard::Error),
}
