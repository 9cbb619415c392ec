
use bastion_test_utils::{
    fixtures::war::mockito::{graphql_mock, members_query},
    prelude::*,
};
use serde_json::json;

use super::{
    guard::InFlight,
    monitor::{CycleReport, PassOutcome, WarMonitor},
};
use crate::server::{
    model::alliance::AllianceConfig, notify::test::RecordingNotifier, pnw::PnwClient,
};

const RAID_CHANNEL: &str = "111222333";

/// Builds a monitor against the test database and mock API.
fn monitor(
    test: &TestContext,
    notifier: RecordingNotifier,
    in_flight: InFlight,
) -> WarMonitor<RecordingNotifier> {
    let client = PnwClient::builder()
        .base_url(&test.pnw_url())
        .user_agent(TEST_USER_AGENT)
        .build()
        .unwrap();

    WarMonitor::new(test.db.clone(), client, notifier, None, in_flight)
}

fn config(test: &TestContext, index: usize) -> AllianceConfig {
    AllianceConfig::from(test.alliances[index].clone())
}

fn notified(outcome: PassOutcome) -> Vec<i64> {
    match outcome {
        PassOutcome::Completed { notified, .. } => notified,
        PassOutcome::Skipped => panic!("expected a completed pass"),
    }
}
