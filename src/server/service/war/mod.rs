//! War synchronization.
//!
//! - [`reconcile`] classifies freshly fetched wars against the persisted active set
//! - [`alert`] creates the one-per-war raid alert for newly detected defensive raids
//! - [`sync`] runs a full fetch, reconcile and persist pass for one alliance

pub mod alert;
pub mod reconcile;
pub mod sync;

pub use sync::{SyncReport, WarSyncService};
