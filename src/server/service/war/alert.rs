//! Raid alert emission.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AlertType, WarType};
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::war_alert::WarAlertRepository, model::db::WarModel};

/// Message of the alert raised when a member nation is raided.
pub fn raid_alert_message(defender_name: &str, attacker_name: &str) -> String {
    format!("{} is under attack by {}!", defender_name, attacker_name)
}

pub struct RaidAlertEmitter<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RaidAlertEmitter<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates one `NEW_DEFENSIVE_RAID` alert per newly inserted defensive raid.
    ///
    /// Wars that aren't defensive raids are ignored. A war that already has a raid alert never
    /// gets a second one.
    ///
    /// # Arguments
    /// - `wars` - Newly persisted war rows
    /// - `now` - Alert creation timestamp
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of alerts created
    /// - `Err(DbErr)` - Query or insert failed
    pub async fn emit(&self, wars: &[WarModel], now: NaiveDateTime) -> Result<u64, DbErr> {
        let alerts: Vec<(i32, String)> = wars
            .iter()
            .filter(|war| war.is_defensive && war.war_type == WarType::Raid)
            .map(|war| {
                (
                    war.id,
                    raid_alert_message(&war.defender_name, &war.attacker_name),
                )
            })
            .collect();

        WarAlertRepository::new(self.db)
            .create_once(AlertType::NewDefensiveRaid, alerts, now)
            .await
    }
}
