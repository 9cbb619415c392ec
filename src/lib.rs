//! War monitoring and raid alerting for Politics & War alliances.

pub mod model;
pub mod server;
