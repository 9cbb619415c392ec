pub mod prelude;

pub mod alliance;
pub mod sea_orm_active_enums;
pub mod war;
pub mod war_alert;
