//! Alliance, war and war alert database insertion utilities.

use chrono::Utc;
use entity::sea_orm_active_enums::{AlertType, WarType};
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::war::{
        factory::{MockAlliance, MockWar},
        WarFixtures,
    },
    model::{AllianceModel, WarAlertModel, WarModel},
};

impl<'a> WarFixtures<'a> {
    /// Insert an alliance into the database.
    ///
    /// # Returns
    /// - `Ok(AllianceModel)` - The created alliance
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_alliance(&self, alliance: MockAlliance) -> Result<AllianceModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Alliance::insert(entity::alliance::ActiveModel {
                slug: ActiveValue::Set(alliance.slug),
                name: ActiveValue::Set(alliance.name),
                pnw_alliance_id: ActiveValue::Set(alliance.pnw_alliance_id),
                discord_guild_id: ActiveValue::Set(None),
                discord_raid_channel_id: ActiveValue::Set(alliance.raid_channel),
                discord_bot_enabled: ActiveValue::Set(alliance.enabled),
                pnw_api_key: ActiveValue::Set(alliance.api_key),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a tracked war for an alliance.
    ///
    /// # Arguments
    /// - `alliance_id` - Database ID of the owning alliance
    /// - `war` - War definition
    /// - `is_defensive` - Whether the alliance's member is the defender
    /// - `is_active` - Whether the war is still active
    pub async fn insert_war(
        &self,
        alliance_id: i32,
        war: &MockWar,
        is_defensive: bool,
        is_active: bool,
    ) -> Result<WarModel, TestError> {
        let now = Utc::now().naive_utc();
        let war_type = match war.war_type.as_str() {
            "RAID" => WarType::Raid,
            "ATTRITION" => WarType::Attrition,
            _ => WarType::Ordinary,
        };

        Ok(entity::prelude::War::insert(entity::war::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            pnw_war_id: ActiveValue::Set(war.id),
            attacker_id: ActiveValue::Set(war.attacker_id),
            attacker_name: ActiveValue::Set(war.attacker_name.clone()),
            attacker_alliance_id: ActiveValue::Set(None),
            defender_id: ActiveValue::Set(war.defender_id),
            defender_name: ActiveValue::Set(war.defender_name.clone()),
            defender_alliance_id: ActiveValue::Set(None),
            war_type: ActiveValue::Set(war_type),
            winner_id: ActiveValue::Set(war.winner_id),
            war_started: ActiveValue::Set(war.date.naive_utc()),
            war_ended: ActiveValue::Set(None),
            is_defensive: ActiveValue::Set(is_defensive),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a raid alert for a tracked war.
    pub async fn insert_alert(&self, war: &WarModel, is_read: bool) -> Result<WarAlertModel, TestError> {
        Ok(
            entity::prelude::WarAlert::insert(entity::war_alert::ActiveModel {
                war_id: ActiveValue::Set(war.id),
                alert_type: ActiveValue::Set(AlertType::NewDefensiveRaid),
                message: ActiveValue::Set(format!(
                    "{} is under attack by {}!",
                    war.defender_name, war.attacker_name
                )),
                is_read: ActiveValue::Set(is_read),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// All war rows of an alliance with the given Politics & War war ID.
    pub async fn wars_by_pnw_id(&self, alliance_id: i32, pnw_war_id: i64) -> Result<Vec<WarModel>, TestError> {
        Ok(entity::prelude::War::find()
            .filter(entity::war::Column::AllianceId.eq(alliance_id))
            .filter(entity::war::Column::PnwWarId.eq(pnw_war_id))
            .all(&self.setup.db)
            .await?)
    }

    /// Alerts raised for a war row.
    pub async fn alerts_for_war(&self, war_id: i32) -> Result<Vec<WarAlertModel>, TestError> {
        Ok(entity::prelude::WarAlert::find()
            .filter(entity::war_alert::Column::WarId.eq(war_id))
            .all(&self.setup.db)
            .await?)
    }

    /// Total number of alerts in the database.
    pub async fn alert_count(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::WarAlert::find().count(&self.setup.db).await?)
    }
}
