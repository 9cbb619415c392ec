mod create_once;
mod get_unread_by_war_ids;

use chrono::Utc;
use entity::sea_orm_active_enums::AlertType;

use super::*;
use crate::server::data::war_alert::WarAlertRepository;
