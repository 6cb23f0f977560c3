//! An in-memory record store, shared behind a mutex.

use super::{Error, RecordStore};
use frachtbrief_record_api::{
    Contract, ContractId, Exporter, ExporterId, Importer, ImporterId, Shipment, ShipmentId,
    Shipper, ShipperId,
};
use im::HashMap;
use std::sync::{Arc, Mutex};

/// A `MemoryRecordStore` keeps all records in memory.
///
/// Clones share the same underlying records. Used by tests and embeddings
/// that do not need persistence.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct MemoryRecordStore {
    records: Arc<Mutex<Records>>,
}

#[derive(Debug, Clone, Default)]
struct Records {
    contracts: HashMap<ContractId, Contract>,
    shipments: HashMap<ShipmentId, Shipment>,
    importers: HashMap<ImporterId, Importer>,
    exporters: HashMap<ExporterId, Exporter>,
    shippers: HashMap<ShipperId, Shipper>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn contract(&self, id: &ContractId) -> Result<Contract, Error> {
        self.records
            .lock()
            .unwrap()
            .contracts
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ContractNotFound(id.clone()))
    }

    fn shipment(&self, id: &ShipmentId) -> Result<Shipment, Error> {
        self.records
            .lock()
            .unwrap()
            .shipments
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ShipmentNotFound(id.clone()))
    }

    fn importer(&self, id: &ImporterId) -> Result<Importer, Error> {
        self.records
            .lock()
            .unwrap()
            .importers
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ImporterNotFound(id.clone()))
    }

    fn insert_contract(&self, contract: Contract) -> Result<(), Error> {
        self.records
            .lock()
            .unwrap()
            .contracts
            .insert(contract.id.clone(), contract);
        Ok(())
    }

    fn insert_shipment(&self, shipment: Shipment) -> Result<(), Error> {
        self.records
            .lock()
            .unwrap()
            .shipments
            .insert(shipment.id.clone(), shipment);
        Ok(())
    }

    fn insert_importer(&self, importer: Importer) -> Result<(), Error> {
        self.records
            .lock()
            .unwrap()
            .importers
            .insert(importer.id.clone(), importer);
        Ok(())
    }

    fn insert_exporter(&self, exporter: Exporter) -> Result<(), Error> {
        self.records
            .lock()
            .unwrap()
            .exporters
            .insert(exporter.id.clone(), exporter);
        Ok(())
    }

    fn insert_shipper(&self, shipper: Shipper) -> Result<(), Error> {
        self.records
            .lock()
            .unwrap()
            .shippers
            .insert(shipper.id.clone(), shipper);
        Ok(())
    }

    fn update_shipment(&self, shipment: &Shipment) -> Result<(), Error> {
        let mut records = self.records.lock().unwrap();
        let current = records
            .shipments
            .get(&shipment.id)
            .ok_or_else(|| Error::ShipmentNotFound(shipment.id.clone()))?;
        if current.revision != shipment.revision {
            return Err(Error::RevisionConflict(shipment.id.clone()));
        }
        let mut updated = shipment.clone();
        updated.revision += 1;
        records.shipments.insert(updated.id.clone(), updated);
        Ok(())
    }
}
