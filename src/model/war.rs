use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An active war as tracked for an alliance
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarDto {
    /// Politics & War war ID
    pub war_id: i64,
    pub attacker_id: i64,
    pub attacker_name: String,
    pub attacker_alliance_id: Option<i64>,
    pub defender_id: i64,
    pub defender_name: String,
    pub defender_alliance_id: Option<i64>,
    /// `ORDINARY`, `RAID` or `ATTRITION`
    pub war_type: String,
    pub winner_id: Option<i64>,
    pub war_started: NaiveDateTime,
    pub war_ended: Option<NaiveDateTime>,
    /// Whether one of the alliance's members is the defender
    pub is_defensive: bool,
    /// Unread alerts raised for this war
    pub alerts: Vec<WarAlertDto>,
}

/// Unread alert raised for a war
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarAlertDto {
    pub id: i32,
    pub alert_type: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

/// Summary of an alliance's active wars
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarSyncDto {
    /// All active wars, newest first
    pub wars: Vec<WarDto>,
    /// Active wars where a member is defending
    pub defensive_wars: Vec<WarDto>,
    /// Active defensive raids
    pub raids: Vec<WarDto>,
    /// Number of unread alerts over active wars
    pub alert_count: u64,
}

/// Monitoring configuration of an alliance with the war bot enabled
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllianceConfigDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub pnw_alliance_id: Option<i64>,
    pub discord_guild_id: Option<String>,
    pub discord_raid_channel_id: Option<String>,
}
