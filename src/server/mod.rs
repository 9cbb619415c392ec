//! Server application core modules.
//!
//! War monitoring for Politics & War alliances: the GraphQL client, reconciliation of fetched
//! wars with the persisted state, raid alerts, the poll scheduler, Discord notifications and the
//! HTTP API.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod notify;
pub mod pnw;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
