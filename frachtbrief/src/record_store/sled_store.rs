//! Persistent record storage on disk.

use super::{Error, RecordStore};
use frachtbrief_record_api::{
    Contract, ContractId, Exporter, Importer, ImporterId, Shipment, ShipmentId, Shipper,
};
use serde::{de::DeserializeOwned, Serialize};
use sled::{Config, Tree};

const CONTRACTS_TREE_NAME: &[u8] = b"contracts";
const SHIPMENTS_TREE_NAME: &[u8] = b"shipments";
const IMPORTERS_TREE_NAME: &[u8] = b"importers";
const EXPORTERS_TREE_NAME: &[u8] = b"exporters";
const SHIPPERS_TREE_NAME: &[u8] = b"shippers";

/// A `SledRecordStore` provides persistent record storage on disk.
///
/// Data is written to disk every 400ms.
#[derive(Debug)]
pub struct SledRecordStore {
    contracts: Tree,
    shipments: Tree,
    importers: Tree,
    exporters: Tree,
    shippers: Tree,
}

impl SledRecordStore {
    /// Create a new store at path.
    pub fn new(path: &str) -> Result<Self, Error> {
        let config = Config::default()
            .path(path)
            .cache_capacity(8_000_000)
            .flush_every_ms(Some(400))
            .snapshot_after_ops(100)
            .use_compression(false)
            .compression_factor(20);

        let database = config.open()?;
        Ok(Self {
            contracts: database.open_tree(CONTRACTS_TREE_NAME)?,
            shipments: database.open_tree(SHIPMENTS_TREE_NAME)?,
            importers: database.open_tree(IMPORTERS_TREE_NAME)?,
            exporters: database.open_tree(EXPORTERS_TREE_NAME)?,
            shippers: database.open_tree(SHIPPERS_TREE_NAME)?,
        })
    }

    fn get<T>(tree: &Tree, key: &[u8]) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
    {
        match tree.get(key)? {
            Some(value) => Ok(Some(postcard::from_bytes(&value)?)),
            None => Ok(None),
        }
    }

    fn insert<T>(tree: &Tree, key: &[u8], record: &T) -> Result<(), Error>
    where
        T: Serialize,
    {
        let value = postcard::to_stdvec(record)?;
        tree.insert(key, value)?;
        Ok(())
    }
}

impl RecordStore for SledRecordStore {
    fn contract(&self, id: &ContractId) -> Result<Contract, Error> {
        Self::get(&self.contracts, id.as_bytes())?
            .ok_or_else(|| Error::ContractNotFound(id.clone()))
    }

    fn shipment(&self, id: &ShipmentId) -> Result<Shipment, Error> {
        Self::get(&self.shipments, id.as_bytes())?
            .ok_or_else(|| Error::ShipmentNotFound(id.clone()))
    }

    fn importer(&self, id: &ImporterId) -> Result<Importer, Error> {
        Self::get(&self.importers, id.as_bytes())?
            .ok_or_else(|| Error::ImporterNotFound(id.clone()))
    }

    fn insert_contract(&self, contract: Contract) -> Result<(), Error> {
        Self::insert(&self.contracts, contract.id.as_bytes(), &contract)
    }

    fn insert_shipment(&self, shipment: Shipment) -> Result<(), Error> {
        Self::insert(&self.shipments, shipment.id.as_bytes(), &shipment)
    }

    fn insert_importer(&self, importer: Importer) -> Result<(), Error> {
        Self::insert(&self.importers, importer.id.as_bytes(), &importer)
    }

    fn insert_exporter(&self, exporter: Exporter) -> Result<(), Error> {
        Self::insert(&self.exporters, exporter.id.as_bytes(), &exporter)
    }

    fn insert_shipper(&self, shipper: Shipper) -> Result<(), Error> {
        Self::insert(&self.shippers, shipper.id.as_bytes(), &shipper)
    }

    fn update_shipment(&self, shipment: &Shipment) -> Result<(), Error> {
        let key = shipment.id.as_bytes();
        let stored = self
            .shipments
            .get(key)?
            .ok_or_else(|| Error::ShipmentNotFound(shipment.id.clone()))?;
        let current: Shipment = postcard::from_bytes(&stored)?;
        if current.revision != shipment.revision {
            return Err(Error::RevisionConflict(shipment.id.clone()));
        }
        let mut updated = shipment.clone();
        updated.revision += 1;
        let value = postcard::to_stdvec(&updated)?;
        // Swap against the exact bytes read above, so a writer that raced us
        // between the read and the swap surfaces as a conflict.
        self.shipments
            .compare_and_swap(key, Some(stored), Some(value))?
            .map_err(|_| Error::RevisionConflict(shipment.id.clone()))
    }
}
