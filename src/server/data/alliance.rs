use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::AllianceModel;

pub struct AllianceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get an alliance using its URL slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<AllianceModel>, DbErr> {
        entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Get every alliance with the war monitor enabled, ordered by ID
    pub async fn get_monitored(&self) -> Result<Vec<AllianceModel>, DbErr> {
        entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::DiscordBotEnabled.eq(true))
            .order_by_asc(entity::alliance::Column::Id)
            .all(self.db)
            .await
    }
}
