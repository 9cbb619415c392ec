//! Discord delivery of raid notifications.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, Timestamp},
    http::Http,
};

use crate::server::{
    error::notify::DeliveryError,
    model::war::war_type_name,
    notify::{RaidNotice, RaidNotifier},
    util::pnw::{nation_link, war_link},
};

const ALERT_COLOUR: u32 = 0xFF6B6B;

/// Delivers raid notices as embeds through the Discord REST API.
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Creates a notifier authenticated with a bot token.
    pub fn from_token(token: &str) -> Self {
        Self::new(Arc::new(Http::new(token)))
    }
}

impl RaidNotifier for DiscordNotifier {
    type Channel = ChannelId;

    async fn resolve_channel(&self, reference: &str) -> Result<ChannelId, DeliveryError> {
        let id = parse_channel_id(reference)?;

        if let Err(e) = self.http.get_channel(id).await {
            tracing::debug!("Failed to fetch Discord channel {}: {}", id, e);
            return Err(DeliveryError::ChannelNotFound(id.get()));
        }

        Ok(id)
    }

    async fn deliver(&self, channel: &ChannelId, notice: &RaidNotice) -> Result<(), DeliveryError> {
        let message = CreateMessage::new().embed(raid_embed(notice));
        channel.send_message(&self.http, message).await?;

        Ok(())
    }
}

/// Parses a channel reference, accepting a raw ID or a `<#id>` mention.
pub fn parse_channel_id(reference: &str) -> Result<ChannelId, DeliveryError> {
    let trimmed = reference.trim();
    let raw = trimmed
        .strip_prefix("<#")
        .and_then(|r| r.strip_suffix('>'))
        .unwrap_or(trimmed);

    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(ChannelId::new(id)),
        _ => Err(DeliveryError::InvalidChannel(reference.to_string())),
    }
}

/// Renders the embed for a raid notice.
pub fn raid_embed(notice: &RaidNotice) -> CreateEmbed {
    CreateEmbed::new()
        .title("🚨 NEW RAID ALERT")
        .colour(ALERT_COLOUR)
        .description(format!("**{}** is under attack!", notice.defender_name))
        .field(
            "⚔️ Attacker",
            format!(
                "[{}]({})",
                notice.attacker_name,
                nation_link(notice.attacker_id)
            ),
            true,
        )
        .field(
            "🛡️ Defender",
            format!(
                "[{}]({})",
                notice.defender_name,
                nation_link(notice.defender_id)
            ),
            true,
        )
        .field("📋 War Type", war_type_name(notice.war_type), true)
        .field("🔗 War ID", notice.war_id.to_string(), true)
        .field(
            "📅 Started",
            format!("<t:{}:f>", notice.war_started.and_utc().timestamp()),
            true,
        )
        .field(
            "🔗 View War",
            format!("[Politics & War]({})", war_link(notice.war_id)),
            true,
        )
        .footer(CreateEmbedFooter::new(format!(
            "{} War Monitor",
            notice.alliance_name
        )))
        .timestamp(Timestamp::now())
}
