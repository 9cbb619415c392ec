//! Raid notification dispatch.
//!
//! A [`RaidNotifier`] knows how to resolve a channel reference and deliver one notice to it.
//! [`NotificationDispatcher`] drives a batch: a missing or unresolvable channel skips the whole
//! batch, and a failed delivery is logged without stopping the remaining notices.

pub mod discord;

use std::future::Future;

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::WarType;

use crate::server::{error::notify::DeliveryError, model::db::WarModel};

/// Everything a raid notification shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidNotice {
    pub war_id: i64,
    pub attacker_id: i64,
    pub attacker_name: String,
    pub defender_id: i64,
    pub defender_name: String,
    pub war_type: WarType,
    pub war_started: NaiveDateTime,
    /// Name of the alliance being notified, shown in the footer
    pub alliance_name: String,
}

impl RaidNotice {
    pub fn new(war: &WarModel, alliance_name: &str) -> Self {
        Self {
            war_id: war.pnw_war_id,
            attacker_id: war.attacker_id,
            attacker_name: war.attacker_name.clone(),
            defender_id: war.defender_id,
            defender_name: war.defender_name.clone(),
            war_type: war.war_type,
            war_started: war.war_started,
            alliance_name: alliance_name.to_string(),
        }
    }
}

/// A destination raid notices can be delivered to.
pub trait RaidNotifier: Send + Sync {
    /// Resolved channel handle
    type Channel: Send + Sync;

    /// Resolves a configured channel reference.
    fn resolve_channel(
        &self,
        reference: &str,
    ) -> impl Future<Output = Result<Self::Channel, DeliveryError>> + Send;

    /// Delivers one notice to a resolved channel.
    fn deliver(
        &self,
        channel: &Self::Channel,
        notice: &RaidNotice,
    ) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

pub struct NotificationDispatcher<'a, N: RaidNotifier> {
    notifier: &'a N,
}

impl<'a, N: RaidNotifier> NotificationDispatcher<'a, N> {
    pub fn new(notifier: &'a N) -> Self {
        Self { notifier }
    }

    /// Sends one message per notice to the channel.
    ///
    /// Never fails: a missing or unresolvable channel is logged and nothing is sent, and each
    /// failed delivery is logged individually.
    ///
    /// # Arguments
    /// - `channel` - Configured channel reference, if any
    /// - `notices` - Raids to notify about
    ///
    /// # Returns
    /// War IDs of the notices that were delivered
    pub async fn dispatch(&self, channel: Option<&str>, notices: &[RaidNotice]) -> Vec<i64> {
        if notices.is_empty() {
            return Vec::new();
        }

        let Some(reference) = channel else {
            tracing::info!(
                "No raid channel configured, skipping {} notification(s)",
                notices.len()
            );
            return Vec::new();
        };

        let channel = match self.notifier.resolve_channel(reference).await {
            Ok(channel) => channel,
            Err(e) => {
                tracing::warn!(
                    "Skipping {} raid notification(s), channel {} unavailable: {}",
                    notices.len(),
                    reference,
                    e
                );
                return Vec::new();
            }
        };

        let mut delivered = Vec::with_capacity(notices.len());

        for notice in notices {
            match self.notifier.deliver(&channel, notice).await {
                Ok(()) => {
                    tracing::info!(
                        "Sent raid alert for war {} ({} attacked by {})",
                        notice.war_id,
                        notice.defender_name,
                        notice.attacker_name
                    );
                    delivered.push(notice.war_id);
                }
                Err(e) => tracing::error!(
                    "Failed to send raid alert for war {} to channel {}: {}",
                    notice.war_id,
                    reference,
                    e
                ),
            }
        }

        delivered
    }
}
