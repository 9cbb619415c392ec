//! Reconciliation of fetched wars against the persisted active set.
//!
//! The engine is pure: it takes the alliance's active wars, the fetched records and the member
//! nation IDs and decides what to insert, update and deactivate. Persistence happens elsewhere.

use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::WarType;

use crate::server::model::{
    db::WarModel,
    war::{RawWarRecord, WarRecord},
};

/// A relevant fetched war and how it relates to the persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedWar {
    pub record: WarRecord,
    /// Whether the defender is a member of the alliance
    pub is_defensive: bool,
    /// The persisted active war with the same ID, `None` for a newly observed war
    pub existing: Option<WarModel>,
}

impl ClassifiedWar {
    pub fn is_new(&self) -> bool {
        self.existing.is_none()
    }

    /// Newly observed, defensive, and of raid type
    pub fn is_new_raid(&self) -> bool {
        self.is_new() && self.is_defensive && self.record.war_type == WarType::Raid
    }
}

/// Outcome of reconciling one fetch.
#[derive(Debug, Default)]
pub struct Reconciliation {
    /// Newly detected defensive raids, a subset of `updated`
    pub new_raids: Vec<WarRecord>,
    /// Every relevant fetched war, new or continuing
    pub updated: Vec<ClassifiedWar>,
    /// Active wars the source no longer reports
    pub deactivated: Vec<WarModel>,
    /// Number of fetched records skipped as malformed
    pub malformed: usize,
}

/// Classifies fetched wars against the alliance's currently active wars.
///
/// - A record is relevant if its attacker or defender is a member, irrelevant records are dropped
/// - A war is defensive if its defender is a member, regardless of the attacker
/// - A war is a new raid if it has no active counterpart, is defensive and is of raid type
/// - An active war whose ID is absent from the fetch is deactivated
/// - Malformed records are logged and counted, never aborting the rest of the batch
///
/// Only active wars are matched, so an ID reappearing after deactivation is a new war.
///
/// # Arguments
/// - `existing_active` - Persisted active wars of the alliance
/// - `fresh` - Records returned by the Politics & War API
/// - `member_ids` - Nation IDs of the alliance's members
pub fn reconcile(
    existing_active: &[WarModel],
    fresh: Vec<RawWarRecord>,
    member_ids: &HashSet<i64>,
) -> Reconciliation {
    let mut existing: HashMap<i64, &WarModel> = HashMap::with_capacity(existing_active.len());
    for war in existing_active {
        existing.entry(war.pnw_war_id).or_insert(war);
    }

    let mut reconciliation = Reconciliation::default();
    // IDs of every record whose ID parses, malformed or not
    let mut reported_ids = HashSet::with_capacity(fresh.len());
    // IDs of validated records, used to collapse duplicates
    let mut classified_ids = HashSet::with_capacity(fresh.len());

    for raw in fresh {
        if let Some(war_id) = raw.war_id() {
            reported_ids.insert(war_id);
        }

        let raw_id = raw.id.clone();
        let record = match WarRecord::try_from(raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping malformed war record (id {:?}): {}", raw_id, e);
                reconciliation.malformed += 1;
                continue;
            }
        };

        if !classified_ids.insert(record.war_id) {
            tracing::debug!("Ignoring duplicate record for war {}", record.war_id);
            continue;
        }

        let defender_is_member = member_ids.contains(&record.defender_id);
        let attacker_is_member = member_ids.contains(&record.attacker_id);

        if !defender_is_member && !attacker_is_member {
            continue;
        }

        let classified = ClassifiedWar {
            existing: existing.get(&record.war_id).map(|war| (*war).clone()),
            is_defensive: defender_is_member,
            record,
        };

        if classified.is_new_raid() {
            reconciliation.new_raids.push(classified.record.clone());
        }

        reconciliation.updated.push(classified);
    }

    reconciliation.deactivated = existing_active
        .iter()
        .filter(|war| !reported_ids.contains(&war.pnw_war_id))
        .cloned()
        .collect();

    reconciliation
}
