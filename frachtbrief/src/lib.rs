#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! Frachtpapiere nachvollziehbar verbucht - **transaction processing for a supply-chain tracking network**
//!
//! ## Overview
//!
//! `Frachtbrief` ingests sensor readings (acceleration, temperature, GPS) and
//! shipment-received events, appends them to the shipment's reading history and
//! raises threshold notifications whenever a reading violates the bounds agreed
//! in the shipment's contract. Records live in a key-addressed record store;
//! the processor performs no locking or consensus of its own and leaves the
//! serialization of concurrent transactions to the store.

pub mod notification;
pub mod processor;
pub mod provision;
pub mod record_store;
