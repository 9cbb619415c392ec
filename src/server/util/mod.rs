//! Utility functions and helpers for server operations.
//!
//! Politics & War specific constants and helpers (batch sizes, deep links) and time window
//! calculations used by the scheduler's retention pruning.

pub mod pnw;
pub mod time;
