use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::WarType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "war")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub alliance_id: i32,
    pub pnw_war_id: i64,
    pub attacker_id: i64,
    pub attacker_name: String,
    pub attacker_alliance_id: Option<i64>,
    pub defender_id: i64,
    pub defender_name: String,
    pub defender_alliance_id: Option<i64>,
    pub war_type: WarType,
    pub winner_id: Option<i64>,
    pub war_started: DateTime,
    pub war_ended: Option<DateTime>,
    pub is_defensive: bool,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alliance::Entity",
        from = "Column::AllianceId",
        to = "super::alliance::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Alliance,
    #[sea_orm(has_many = "super::war_alert::Entity")]
    WarAlert,
}

impl Related<super::alliance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alliance.def()
    }
}

impl Related<super::war_alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WarAlert.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
