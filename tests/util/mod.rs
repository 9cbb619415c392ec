//! Helpers turning a [`TestContext`] into the server types under test.

use std::sync::Arc;

use bastion::server::{
    model::{alliance::AllianceConfig, app::AppState},
    pnw::PnwClient,
    scheduler::guard::InFlight,
};
use bastion_test_utils::{constant::TEST_USER_AGENT, TestContext};

pub trait TestContextExt {
    /// Client pointed at the mock GraphQL server
    fn pnw_client(&self) -> PnwClient;

    /// Application state with no default API key
    fn into_app_state(&self) -> AppState;

    /// Configuration of the alliance inserted at `index`
    fn alliance_config(&self, index: usize) -> AllianceConfig;
}

impl TestContextExt for TestContext {
    fn pnw_client(&self) -> PnwClient {
        PnwClient::builder()
            .base_url(&self.pnw_url())
            .user_agent(TEST_USER_AGENT)
            .build()
            .expect("Failed to build PnW client")
    }

    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            pnw_client: self.pnw_client(),
            default_api_key: None::<Arc<str>>,
            in_flight: InFlight::new(),
        }
    }

    fn alliance_config(&self, index: usize) -> AllianceConfig {
        AllianceConfig::from(self.alliances[index].clone())
    }
}
