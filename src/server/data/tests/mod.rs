mod alliance;
mod war_alert;

use bastion_test_utils::prelude::*;

use crate::server::model::war::{RawWarRecord, WarRecord};

/// Validated record for a war fixture, as reconciliation would produce it.
fn record(war: &MockWar) -> WarRecord {
    let raw: RawWarRecord = serde_json::from_value(war.to_json()).unwrap();
    WarRecord::try_from(raw).unwrap()
}
