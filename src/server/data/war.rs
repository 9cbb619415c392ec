use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::WarType;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{db::WarModel, war::WarRecord};

pub struct WarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get all active wars tracked for an alliance, newest first
    pub async fn get_active(&self, alliance_id: i32) -> Result<Vec<WarModel>, DbErr> {
        entity::prelude::War::find()
            .filter(entity::war::Column::AllianceId.eq(alliance_id))
            .filter(entity::war::Column::IsActive.eq(true))
            .order_by_desc(entity::war::Column::CreatedAt)
            .order_by_desc(entity::war::Column::Id)
            .all(self.db)
            .await
    }

    /// Get active defensive raids of an alliance that started at or after `since`
    pub async fn get_active_raids_since(
        &self,
        alliance_id: i32,
        since: NaiveDateTime,
    ) -> Result<Vec<WarModel>, DbErr> {
        entity::prelude::War::find()
            .filter(entity::war::Column::AllianceId.eq(alliance_id))
            .filter(entity::war::Column::IsActive.eq(true))
            .filter(entity::war::Column::IsDefensive.eq(true))
            .filter(entity::war::Column::WarType.eq(WarType::Raid))
            .filter(entity::war::Column::WarStarted.gte(since))
            .order_by_asc(entity::war::Column::WarStarted)
            .all(self.db)
            .await
    }

    /// Inserts newly observed wars as active
    ///
    /// # Returns
    /// - `Ok(Vec<WarModel>)` - The inserted rows, including their database IDs
    /// - `Err(DbErr)` - Insert failed
    pub async fn create_many(
        &self,
        alliance_id: i32,
        wars: &[(WarRecord, bool)],
        now: NaiveDateTime,
    ) -> Result<Vec<WarModel>, DbErr> {
        if wars.is_empty() {
            return Ok(Vec::new());
        }

        let wars = wars.iter().map(|(record, is_defensive)| entity::war::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            pnw_war_id: ActiveValue::Set(record.war_id),
            attacker_id: ActiveValue::Set(record.attacker_id),
            attacker_name: ActiveValue::Set(record.attacker_name.clone()),
            attacker_alliance_id: ActiveValue::Set(record.attacker_alliance_id),
            defender_id: ActiveValue::Set(record.defender_id),
            defender_name: ActiveValue::Set(record.defender_name.clone()),
            defender_alliance_id: ActiveValue::Set(record.defender_alliance_id),
            war_type: ActiveValue::Set(record.war_type),
            winner_id: ActiveValue::Set(record.winner_id),
            war_started: ActiveValue::Set(record.war_started),
            war_ended: ActiveValue::Set(record.winner_id.map(|_| now)),
            is_defensive: ActiveValue::Set(*is_defensive),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::War::insert_many(wars)
            .exec_with_returning(self.db)
            .await
    }

    /// Overwrites every mutable field of a tracked war with the latest source data
    ///
    /// `war_ended` is stamped the first time a winner is reported and kept afterwards.
    pub async fn update_from_record(
        &self,
        existing: &WarModel,
        record: &WarRecord,
        is_defensive: bool,
        now: NaiveDateTime,
    ) -> Result<WarModel, DbErr> {
        let war_ended = existing
            .war_ended
            .or_else(|| record.winner_id.map(|_| now));

        let war = entity::war::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            attacker_id: ActiveValue::Set(record.attacker_id),
            attacker_name: ActiveValue::Set(record.attacker_name.clone()),
            attacker_alliance_id: ActiveValue::Set(record.attacker_alliance_id),
            defender_id: ActiveValue::Set(record.defender_id),
            defender_name: ActiveValue::Set(record.defender_name.clone()),
            defender_alliance_id: ActiveValue::Set(record.defender_alliance_id),
            war_type: ActiveValue::Set(record.war_type),
            winner_id: ActiveValue::Set(record.winner_id),
            war_started: ActiveValue::Set(record.war_started),
            war_ended: ActiveValue::Set(war_ended),
            is_defensive: ActiveValue::Set(is_defensive),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        war.update(self.db).await
    }

    /// Marks wars as no longer active
    ///
    /// Wars without an end timestamp get `now`. Already inactive wars are left untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of wars deactivated
    /// - `Err(DbErr)` - Update failed
    pub async fn deactivate(&self, war_ids: &[i32], now: NaiveDateTime) -> Result<u64, DbErr> {
        if war_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::War::update_many()
            .col_expr(entity::war::Column::WarEnded, Expr::value(now))
            .filter(entity::war::Column::Id.is_in(war_ids.iter().copied()))
            .filter(entity::war::Column::IsActive.eq(true))
            .filter(entity::war::Column::WarEnded.is_null())
            .exec(self.db)
            .await?;

        let result = entity::prelude::War::update_many()
            .col_expr(entity::war::Column::IsActive, Expr::value(false))
            .col_expr(entity::war::Column::UpdatedAt, Expr::value(now))
            .filter(entity::war::Column::Id.is_in(war_ids.iter().copied()))
            .filter(entity::war::Column::IsActive.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
