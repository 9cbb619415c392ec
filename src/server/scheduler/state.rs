//! Per-alliance notification state.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::server::model::db::WarModel;

/// Raids already notified for one alliance and when it was last checked.
///
/// Held in memory by the monitor only. It can be rebuilt from persisted wars, which is what
/// seeding does on the first pass after startup.
#[derive(Debug, Default)]
pub struct AllianceWarState {
    /// War ID to the war's start time
    known: HashMap<i64, NaiveDateTime>,
    last_check: Option<DateTime<Utc>>,
    seeded: bool,
}

impl AllianceWarState {
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Marks already persisted raids as known.
    pub fn seed(&mut self, raids: &[WarModel]) {
        for raid in raids {
            self.known.insert(raid.pnw_war_id, raid.war_started);
        }
        self.seeded = true;
    }

    pub fn is_known(&self, war_id: i64) -> bool {
        self.known.contains_key(&war_id)
    }

    pub fn record(&mut self, war_id: i64, started: NaiveDateTime) {
        self.known.insert(war_id, started);
    }

    /// Drops wars that started before `cutoff`.
    ///
    /// # Returns
    /// Number of wars dropped
    pub fn prune(&mut self, cutoff: NaiveDateTime) -> usize {
        let before = self.known.len();
        self.known.retain(|_, started| *started >= cutoff);
        before - self.known.len()
    }

    pub fn last_check(&self) -> Option<DateTime<Utc>> {
        self.last_check
    }

    pub fn set_last_check(&mut self, at: DateTime<Utc>) {
        self.last_check = Some(at);
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}
