//! Key-addressed persistence for contract, shipment and participant records.

mod error;
mod memory;
mod sled_store;

pub use error::Error;
pub use memory::MemoryRecordStore;
pub use sled_store::SledRecordStore;

use frachtbrief_record_api::{
    Contract, ContractId, Exporter, Importer, ImporterId, Shipment, ShipmentId, Shipper,
};
use std::fmt::Debug;

/// Read and update access to the records transaction processing works on.
///
/// `update_shipment` must reject stale revisions, so that the single write a
/// handler performs is all-or-nothing even when two transactions race on the
/// same shipment.
pub trait RecordStore: Debug + Send + Sync {
    /// Look up a contract by its identifier.
    fn contract(&self, id: &ContractId) -> Result<Contract, Error>;

    /// Look up a shipment by its identifier.
    fn shipment(&self, id: &ShipmentId) -> Result<Shipment, Error>;

    /// Look up an importer by its identifier.
    fn importer(&self, id: &ImporterId) -> Result<Importer, Error>;

    /// Store a contract record.
    fn insert_contract(&self, contract: Contract) -> Result<(), Error>;

    /// Store a shipment record.
    fn insert_shipment(&self, shipment: Shipment) -> Result<(), Error>;

    /// Store an importer record.
    fn insert_importer(&self, importer: Importer) -> Result<(), Error>;

    /// Store an exporter record. Exporters are provisioned but never read
    /// back by any handler.
    fn insert_exporter(&self, exporter: Exporter) -> Result<(), Error>;

    /// Store a shipper record. Shippers are provisioned but never read back
    /// by any handler.
    fn insert_shipper(&self, shipper: Shipper) -> Result<(), Error>;

    /// Persist an updated shipment.
    ///
    /// The caller's `revision` must match the stored one; the store bumps the
    /// revision on success and fails with [`Error::RevisionConflict`]
    /// otherwise.
    fn update_shipment(&self, shipment: &Shipment) -> Result<(), Error>;
}
