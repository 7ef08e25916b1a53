//! Application layer - the decision store and its persisted document format.
//!
//! The store orchestrates domain operations and writes through the
//! `KeyValueStorage` port after every change to the collection.

mod decision_store;
pub mod journal_document;

pub use decision_store::{DecisionStore, LoadReport, DEFAULT_STORAGE_KEY};
