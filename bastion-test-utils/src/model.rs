//! Database model aliases used by fixtures.

pub type AllianceModel = entity::alliance::Model;
pub type WarModel = entity::war::Model;
pub type WarAlertModel = entity::war_alert::Model;
