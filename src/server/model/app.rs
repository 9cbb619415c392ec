use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{pnw::PnwClient, scheduler::guard::InFlight};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub pnw_client: PnwClient,
    /// Default Politics & War API key used when an alliance has none of its own
    pub default_api_key: Option<Arc<str>>,
    /// Alliances with a sync pass currently running, shared with the scheduler
    pub in_flight: InFlight,
}
