use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AlertType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "war_alert")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub war_id: i32,
    pub alert_type: AlertType,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::war::Entity",
        from = "Column::WarId",
        to = "super::war::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    War,
}

impl Related<super::war::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::War.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
