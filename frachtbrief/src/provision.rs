//! Loads the records that are created and owned outside the processor.
//!
//! Contracts, shipments and participants come from a provisioning process
//! that is not part of this crate. This module reads its output from a YAML
//! file and seeds a record store with it.

use crate::record_store::{self, RecordStore};
use err_derive::Error;
use frachtbrief_record_api::{Contract, Exporter, Importer, Shipment, Shipper};
use serde::Deserialize;
use std::fs;

/// An error of the `provision` module.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The provisioning file could not be read.
    #[error(display = "{}", 0)]
    Io(#[error(from)] std::io::Error),

    /// The provisioning file could not be parsed.
    #[error(display = "{}", 0)]
    Yaml(#[error(from)] serde_yaml::Error),

    /// A record could not be stored.
    #[error(display = "{}", 0)]
    RecordStore(#[error(from)] record_store::Error),
}

/// Records created by the provisioning process.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvisionData {
    /// The provisioned contracts.
    #[serde(default)]
    pub contracts: Vec<Contract>,

    /// The provisioned shipments, usually with empty reading histories.
    #[serde(default)]
    pub shipments: Vec<Shipment>,

    /// The provisioned importers.
    #[serde(default)]
    pub importers: Vec<Importer>,

    /// The provisioned exporters.
    #[serde(default)]
    pub exporters: Vec<Exporter>,

    /// The provisioned shippers.
    #[serde(default)]
    pub shippers: Vec<Shipper>,
}

impl ProvisionData {
    /// Load provisioning data from a YAML file.
    pub fn load(path: &str) -> Result<Self, Error> {
        let data = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&data)?)
    }

    /// Insert all records into the given store.
    pub fn apply(&self, store: &dyn RecordStore) -> Result<(), Error> {
        for importer in &self.importers {
            store.insert_importer(importer.clone())?;
        }
        for exporter in &self.exporters {
            store.insert_exporter(exporter.clone())?;
        }
        for shipper in &self.shippers {
            store.insert_shipper(shipper.clone())?;
        }
        for contract in &self.contracts {
            store.insert_contract(contract.clone())?;
        }
        for shipment in &self.shipments {
            store.insert_shipment(shipment.clone())?;
        }
        log::info!(
            "Provisioned {} contract(s) and {} shipment(s).",
            self.contracts.len(),
            self.shipments.len()
        );
        Ok(())
    }
}
