//! Business logic services.
//!
//! Services coordinate the Politics & War client and the repositories. The war service owns the
//! reconciliation engine, alert emission and the sync pass that ties them together.

pub mod war;
