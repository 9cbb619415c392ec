use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "alliance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub pnw_alliance_id: Option<i64>,
    pub discord_guild_id: Option<String>,
    pub discord_raid_channel_id: Option<String>,
    pub discord_bot_enabled: bool,
    pub pnw_api_key: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::war::Entity")]
    War,
}

impl Related<super::war::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::War.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
