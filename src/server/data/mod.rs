//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for alliances, wars and war alerts. Each is generic over
//! [`sea_orm::ConnectionTrait`] so the same repository runs against a plain connection or inside
//! the transaction a sync pass persists with.

pub mod alliance;
pub mod war;
pub mod war_alert;

#[cfg(test)]
mod tests;
