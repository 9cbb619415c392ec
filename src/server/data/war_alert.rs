use std::collections::HashSet;

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::AlertType;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::db::WarAlertModel;

pub struct WarAlertRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WarAlertRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates one alert of the given type per war, skipping wars that already have one
    ///
    /// # Arguments
    /// - `alert_type` - Type of alert to create
    /// - `alerts` - Tuple of war database ID and alert message
    /// - `now` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of alerts created
    /// - `Err(DbErr)` - Query or insert failed
    pub async fn create_once(
        &self,
        alert_type: AlertType,
        alerts: Vec<(i32, String)>,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        if alerts.is_empty() {
            return Ok(0);
        }

        let war_ids: Vec<i32> = alerts.iter().map(|(war_id, _)| *war_id).collect();
        let existing: HashSet<i32> = entity::prelude::WarAlert::find()
            .select_only()
            .column(entity::war_alert::Column::WarId)
            .filter(entity::war_alert::Column::AlertType.eq(alert_type))
            .filter(entity::war_alert::Column::WarId.is_in(war_ids))
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let mut seen = HashSet::new();
        let alerts: Vec<entity::war_alert::ActiveModel> = alerts
            .into_iter()
            .filter(|(war_id, _)| !existing.contains(war_id) && seen.insert(*war_id))
            .map(|(war_id, message)| entity::war_alert::ActiveModel {
                war_id: ActiveValue::Set(war_id),
                alert_type: ActiveValue::Set(alert_type),
                message: ActiveValue::Set(message),
                is_read: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .collect();

        if alerts.is_empty() {
            return Ok(0);
        }

        let count = alerts.len() as u64;
        entity::prelude::WarAlert::insert_many(alerts)
            .exec_without_returning(self.db)
            .await?;

        Ok(count)
    }

    /// Get unread alerts for the given wars, newest first
    pub async fn get_unread_by_war_ids(&self, war_ids: &[i32]) -> Result<Vec<WarAlertModel>, DbErr> {
        if war_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::WarAlert::find()
            .filter(entity::war_alert::Column::WarId.is_in(war_ids.iter().copied()))
            .filter(entity::war_alert::Column::IsRead.eq(false))
            .order_by_desc(entity::war_alert::Column::CreatedAt)
            .order_by_desc(entity::war_alert::Column::Id)
            .all(self.db)
            .await
    }
}
