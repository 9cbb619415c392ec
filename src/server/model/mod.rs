//! Server-side domain models.
//!
//! Types shared between the Politics & War client, the reconciliation engine, the scheduler and
//! the HTTP layer. Database entities are re-exported through [`db`] aliases.

pub mod alliance;
pub mod app;
pub mod db;
pub mod war;
