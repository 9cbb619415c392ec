//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models generated in the `entity` crate.

/// Type alias for alliance database model.
///
/// An alliance being monitored, with its Politics & War identifier, Discord destination and
/// optional per-alliance API key.
///
/// # Fields (from `entity::alliance::Model`)
/// - `id` - Primary key
/// - `slug` - Unique URL slug
/// - `name` - Display name, used in notification footers
/// - `pnw_alliance_id` - Politics & War alliance ID (nullable)
/// - `discord_guild_id` - Discord guild (nullable)
/// - `discord_raid_channel_id` - Discord channel raid notifications are sent to (nullable)
/// - `discord_bot_enabled` - Whether the war monitor polls this alliance
/// - `pnw_api_key` - Decrypted Politics & War API key (nullable)
pub type AllianceModel = entity::alliance::Model;

/// Type alias for war database model.
///
/// One war as seen by one alliance. Rows are never deleted by the monitor, only deactivated.
///
/// # Fields (from `entity::war::Model`)
/// - `id` - Primary key
/// - `alliance_id` - Owning alliance
/// - `pnw_war_id` - Politics & War war ID
/// - `attacker_id` / `attacker_name` / `attacker_alliance_id` - Attacking nation
/// - `defender_id` / `defender_name` / `defender_alliance_id` - Defending nation
/// - `war_type` - Ordinary, raid or attrition
/// - `winner_id` - Winning nation (nullable)
/// - `war_started` / `war_ended` - Source timestamps (`war_ended` nullable)
/// - `is_defensive` - Whether a member of the alliance is the defender
/// - `is_active` - Whether the source still reports the war as active
pub type WarModel = entity::war::Model;

/// Type alias for war alert database model.
pub type WarAlertModel = entity::war_alert::Model;
