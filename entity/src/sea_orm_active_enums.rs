use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum WarType {
    #[sea_orm(string_value = "ORDINARY")]
    Ordinary,
    #[sea_orm(string_value = "RAID")]
    Raid,
    #[sea_orm(string_value = "ATTRITION")]
    Attrition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum AlertType {
    #[sea_orm(string_value = "NEW_DEFENSIVE_RAID")]
    NewDefensiveRaid,
}
