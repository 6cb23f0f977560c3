#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! Frachtpapiere nachvollziehbar verbucht - **transaction processing for a supply-chain tracking network**
//!
//! ## Overview
//!
//! This binary provisions a persistent record store and replays a transaction
//! feed through the shipment event processor. Threshold notifications are
//! written to the log. Transaction submission over the wire is owned by the
//! surrounding network layer and is not part of this binary.

use frachtbrief::{
    notification::LogSink, processor::ShipmentEventProcessor, provision::ProvisionData,
    record_store::SledRecordStore,
};
use frachtbrief_record_api::Transaction;
use serde::Deserialize;
use std::{fs, sync::Arc};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
struct Opt {
    /// The configuration file to load.
    #[structopt(default_value = "./config/config.toml")]
    config: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Config {
    data_path: String,
    provision_path: String,
    feed_path: String,
}

fn main() {
    pretty_env_logger::init();

    let opt = Opt::from_args();
    log::debug!("Command line arguments: {:#?}", opt);

    // load and parse config
    let config_data = fs::read_to_string(&opt.config).unwrap();
    let config: Config = toml::from_str(&config_data).unwrap();

    let record_store = SledRecordStore::new(&config.data_path).unwrap();
    let record_store: Arc<SledRecordStore> = Arc::new(record_store);

    let provision = ProvisionData::load(&config.provision_path).unwrap();
    provision.apply(record_store.as_ref()).unwrap();

    let processor = ShipmentEventProcessor::new(record_store, Arc::new(LogSink));

    let feed_data = fs::read_to_string(&config.feed_path).unwrap();
    let transactions: Vec<Transaction> = serde_yaml::from_str(&feed_data).unwrap();

    for transaction in transactions {
        let shipment = transaction.shipment().clone();
        match processor.process(transaction) {
            Ok(()) => log::debug!("Transaction for shipment {} ok!", shipment),
            Err(err) => log::error!("Failed to process transaction for {}: {}", shipment, err),
        }
    }
    log::info!("Feed replayed. Bye.");
}
