use crate::{model::war::AllianceConfigDto, server::model::db::AllianceModel};

/// Monitoring configuration for one alliance, as held in the scheduler's snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllianceConfig {
    /// Database ID of the alliance
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub pnw_alliance_id: Option<i64>,
    pub discord_guild_id: Option<String>,
    /// Channel reference raid notifications are delivered to
    pub raid_channel: Option<String>,
    pub enabled: bool,
    pub api_key: Option<String>,
}

impl From<AllianceModel> for AllianceConfig {
    fn from(alliance: AllianceModel) -> Self {
        Self {
            id: alliance.id,
            slug: alliance.slug,
            name: alliance.name,
            pnw_alliance_id: alliance.pnw_alliance_id,
            discord_guild_id: alliance.discord_guild_id,
            raid_channel: alliance
                .discord_raid_channel_id
                .filter(|channel| !channel.trim().is_empty()),
            enabled: alliance.discord_bot_enabled,
            api_key: alliance.pnw_api_key.filter(|key| !key.trim().is_empty()),
        }
    }
}

impl From<AllianceConfig> for AllianceConfigDto {
    fn from(config: AllianceConfig) -> Self {
        Self {
            id: config.id,
            slug: config.slug,
            name: config.name,
            pnw_alliance_id: config.pnw_alliance_id,
            discord_guild_id: config.discord_guild_id,
            discord_raid_channel_id: config.raid_channel,
        }
    }
}

/// A member nation of a monitored alliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllianceMember {
    pub nation_id: i64,
    pub nation_name: String,
}
