//! Test fixture modules for database and HTTP mock creation.
//!
//! - `war` - Alliance, war and war alert records, raw GraphQL war payloads and the mock
//!   GraphQL endpoints serving them

pub mod war;
