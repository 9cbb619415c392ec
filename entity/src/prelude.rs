pub use super::alliance::Entity as Alliance;
pub use super::war::Entity as War;
pub use super::war_alert::Entity as WarAlert;
