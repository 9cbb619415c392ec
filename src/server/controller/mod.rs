//! HTTP controller endpoints for the Bastion web API.
//!
//! Handlers look up the alliance, call into the war sync service and return JSON. Errors are
//! converted to responses by [`crate::server::error::Error`].

pub mod bot;
pub mod war;
