//! On-demand and scheduled war sync passes.

use std::collections::HashSet;

use chrono::Utc;
use entity::sea_orm_active_enums::{AlertType, WarType};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::war::{WarAlertDto, WarDto, WarSyncDto},
    server::{
        data::{war::WarRepository, war_alert::WarAlertRepository},
        error::{war::WarError, Error},
        model::{
            alliance::AllianceConfig,
            db::{WarAlertModel, WarModel},
            war::war_type_name,
        },
        pnw::PnwClient,
        service::war::{
            alert::RaidAlertEmitter,
            reconcile::{reconcile, Reconciliation},
        },
    },
};

/// Result of one sync pass for an alliance.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Rows inserted for newly detected defensive raids
    pub new_raids: Vec<WarModel>,
    /// Rows of every active defensive raid after the pass, new ones included
    pub active_raids: Vec<WarModel>,
    /// Rows of every relevant fetched war after the pass
    pub updated: Vec<WarModel>,
    /// Number of wars deactivated
    pub deactivated: u64,
    /// Number of alerts created
    pub alerts_created: u64,
    /// Number of fetched records skipped as malformed
    pub malformed: usize,
}

pub struct WarSyncService<'a> {
    db: &'a DatabaseConnection,
    client: &'a PnwClient,
    default_api_key: Option<&'a str>,
}

impl<'a> WarSyncService<'a> {
    /// Creates a new instance of [`WarSyncService`]
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `client` - Politics & War API client
    /// - `default_api_key` - API key used for alliances without their own
    pub fn new(
        db: &'a DatabaseConnection,
        client: &'a PnwClient,
        default_api_key: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            client,
            default_api_key,
        }
    }

    /// Fetches an alliance's active wars and reconciles them with the persisted state.
    ///
    /// Deactivation, upserts and alert creation run in a single transaction.
    ///
    /// # Arguments
    /// - `alliance` - Alliance to sync
    ///
    /// # Returns
    /// - `Ok(SyncReport)` - Pass completed
    /// - `Err(Error::WarError)` - Alliance has no Politics & War alliance ID or no API key
    /// - `Err(Error::ExternalSource)` - Fetching members or wars failed
    /// - `Err(Error::DbErr)` - Persisting the pass failed
    pub async fn sync_alliance(&self, alliance: &AllianceConfig) -> Result<SyncReport, Error> {
        let pnw_alliance_id = alliance
            .pnw_alliance_id
            .ok_or_else(|| WarError::MissingPnwAllianceId(alliance.slug.clone()))?;

        let api_key = alliance
            .api_key
            .as_deref()
            .or(self.default_api_key)
            .ok_or_else(|| WarError::MissingApiKey(alliance.slug.clone()))?;

        let members = self
            .client
            .fetch_alliance_members(pnw_alliance_id, api_key)
            .await?;
        let member_ids: Vec<i64> = members.iter().map(|m| m.nation_id).collect();

        if member_ids.is_empty() {
            tracing::warn!(
                "Alliance {} (PnW {}) has no members, all tracked wars will be deactivated",
                alliance.slug,
                pnw_alliance_id
            );
        }

        let fresh = self
            .client
            .fetch_active_wars(pnw_alliance_id, api_key, &member_ids)
            .await?;

        let existing = WarRepository::new(self.db).get_active(alliance.id).await?;
        let member_ids: HashSet<i64> = member_ids.into_iter().collect();

        let reconciliation = reconcile(&existing, fresh, &member_ids);
        let report = self.persist(alliance.id, reconciliation).await?;

        tracing::debug!(
            "Synced alliance {}: {} war(s) updated, {} new raid(s), {} deactivated, {} malformed",
            alliance.slug,
            report.updated.len(),
            report.new_raids.len(),
            report.deactivated,
            report.malformed
        );

        Ok(report)
    }

    /// Applies a reconciliation within one transaction
    async fn persist(
        &self,
        alliance_id: i32,
        reconciliation: Reconciliation,
    ) -> Result<SyncReport, Error> {
        let now = Utc::now().naive_utc();
        let txn = self.db.begin().await?;
        let war_repo = WarRepository::new(&txn);

        let deactivated_ids: Vec<i32> = reconciliation.deactivated.iter().map(|w| w.id).collect();
        let deactivated = war_repo.deactivate(&deactivated_ids, now).await?;

        let mut updated = Vec::with_capacity(reconciliation.updated.len());
        let mut new_wars = Vec::new();

        for war in reconciliation.updated {
            match &war.existing {
                Some(existing) => {
                    let model = war_repo
                        .update_from_record(existing, &war.record, war.is_defensive, now)
                        .await?;
                    updated.push(model);
                }
                None => new_wars.push((war.record, war.is_defensive)),
            }
        }

        let inserted = war_repo.create_many(alliance_id, &new_wars, now).await?;
        let alerts_created = RaidAlertEmitter::new(&txn).emit(&inserted, now).await?;

        txn.commit().await?;

        let new_raids: Vec<WarModel> = inserted
            .iter()
            .filter(|war| war.is_defensive && war.war_type == WarType::Raid)
            .cloned()
            .collect();
        updated.extend(inserted);

        let active_raids: Vec<WarModel> = updated
            .iter()
            .filter(|war| war.is_defensive && war.war_type == WarType::Raid)
            .cloned()
            .collect();

        Ok(SyncReport {
            new_raids,
            active_raids,
            updated,
            deactivated,
            alerts_created,
            malformed: reconciliation.malformed,
        })
    }

    /// Builds the summary of an alliance's active wars and their unread alerts.
    ///
    /// # Arguments
    /// - `alliance_id` - Database ID of the alliance
    ///
    /// # Returns
    /// - `Ok(WarSyncDto)` - Active wars newest first, split into defensive wars and raids
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn summary(&self, alliance_id: i32) -> Result<WarSyncDto, Error> {
        let wars = WarRepository::new(self.db).get_active(alliance_id).await?;

        let war_ids: Vec<i32> = wars.iter().map(|w| w.id).collect();
        let alerts = WarAlertRepository::new(self.db)
            .get_unread_by_war_ids(&war_ids)
            .await?;
        let alert_count = alerts.len() as u64;

        let wars: Vec<WarDto> = wars
            .into_iter()
            .map(|war| {
                let war_alerts = alerts
                    .iter()
                    .filter(|a| a.war_id == war.id)
                    .map(alert_dto)
                    .collect();
                war_dto(war, war_alerts)
            })
            .collect();

        let defensive_wars: Vec<WarDto> = wars.iter().filter(|w| w.is_defensive).cloned().collect();
        let raids: Vec<WarDto> = defensive_wars
            .iter()
            .filter(|w| w.war_type == war_type_name(WarType::Raid))
            .cloned()
            .collect();

        Ok(WarSyncDto {
            wars,
            defensive_wars,
            raids,
            alert_count,
        })
    }
}

fn war_dto(war: WarModel, alerts: Vec<WarAlertDto>) -> WarDto {
    WarDto {
        war_id: war.pnw_war_id,
        attacker_id: war.attacker_id,
        attacker_name: war.attacker_name,
        attacker_alliance_id: war.attacker_alliance_id,
        defender_id: war.defender_id,
        defender_name: war.defender_name,
        defender_alliance_id: war.defender_alliance_id,
        war_type: war_type_name(war.war_type).to_string(),
        winner_id: war.winner_id,
        war_started: war.war_started,
        war_ended: war.war_ended,
        is_defensive: war.is_defensive,
        alerts,
    }
}

fn alert_dto(alert: &WarAlertModel) -> WarAlertDto {
    let alert_type = match alert.alert_type {
        AlertType::NewDefensiveRaid => "NEW_DEFENSIVE_RAID",
    };

    WarAlertDto {
        id: alert.id,
        alert_type: alert_type.to_string(),
        message: alert.message.clone(),
        created_at: alert.created_at,
    }
}
