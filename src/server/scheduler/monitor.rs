//! Alliance war monitor.
//!
//! [`WarMonitor`] runs the per-alliance poll pass (fetch, reconcile, notify) over every
//! configured alliance. Alliances are processed one after another and a failed pass is logged
//! without affecting the others. A pass for an alliance that is already busy is skipped.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, RwLock},
};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{alliance::AllianceRepository, war::WarRepository},
    error::{retry::ErrorRetryStrategy, Error},
    model::alliance::AllianceConfig,
    notify::{NotificationDispatcher, RaidNotice, RaidNotifier},
    pnw::PnwClient,
    scheduler::{guard::InFlight, state::AllianceWarState},
    service::war::WarSyncService,
    util::time::{retention_cutoff, within_retention},
};

/// Outcome of one alliance's pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// Another pass for the alliance was still running
    Skipped,
    Completed {
        /// Number of relevant wars synced
        wars: usize,
        /// Number of newly detected raids
        new_raids: usize,
        /// War IDs of the raids notified this pass
        notified: Vec<i64>,
    },
}

/// Counters for one poll cycle over all alliances.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub completed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub notified: usize,
}

pub struct WarMonitor<N: RaidNotifier> {
    db: DatabaseConnection,
    client: PnwClient,
    notifier: N,
    default_api_key: Option<Arc<str>>,
    in_flight: InFlight,
    configs: RwLock<Arc<Vec<AllianceConfig>>>,
    states: Mutex<HashMap<i32, Arc<tokio::sync::Mutex<AllianceWarState>>>>,
}

impl<N: RaidNotifier> WarMonitor<N> {
    /// Creates a new instance of [`WarMonitor`] with an empty configuration snapshot.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `client` - Politics & War API client
    /// - `notifier` - Destination for raid notifications
    /// - `default_api_key` - API key used for alliances without their own
    /// - `in_flight` - Busy set shared with on-demand syncs
    pub fn new(
        db: DatabaseConnection,
        client: PnwClient,
        notifier: N,
        default_api_key: Option<Arc<str>>,
        in_flight: InFlight,
    ) -> Self {
        Self {
            db,
            client,
            notifier,
            default_api_key,
            in_flight,
            configs: RwLock::new(Arc::new(Vec::new())),
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Current alliance configuration snapshot.
    pub fn configs(&self) -> Arc<Vec<AllianceConfig>> {
        let configs = self
            .configs
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&configs)
    }

    /// Replaces the configuration snapshot.
    ///
    /// State of alliances no longer configured is dropped.
    pub fn replace_configs(&self, configs: Vec<AllianceConfig>) {
        {
            let mut states = self
                .states
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            states.retain(|id, _| configs.iter().any(|c| c.id == *id));
        }

        let mut current = self
            .configs
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Arc::new(configs);
    }

    /// Reloads enabled alliances from the database into a new snapshot.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of alliances now monitored
    /// - `Err(Error::DbErr)` - Query failed, the previous snapshot is kept
    pub async fn refresh_configs(&self) -> Result<usize, Error> {
        let configs: Vec<AllianceConfig> = AllianceRepository::new(&self.db)
            .get_monitored()
            .await?
            .into_iter()
            .map(AllianceConfig::from)
            .collect();

        let count = configs.len();
        self.replace_configs(configs);

        Ok(count)
    }

    /// Runs one pass for every alliance in the current snapshot.
    ///
    /// A failed pass is logged and counted, it never stops the cycle.
    pub async fn run_cycle(&self) -> CycleReport {
        let configs = self.configs();
        let mut report = CycleReport::default();

        for config in configs.iter().filter(|c| c.enabled) {
            match self.run_alliance(config).await {
                Ok(PassOutcome::Skipped) => report.skipped += 1,
                Ok(PassOutcome::Completed { notified, .. }) => {
                    report.completed += 1;
                    report.notified += notified.len();
                }
                Err(e) => {
                    report.failed += 1;
                    match e.to_retry_strategy() {
                        ErrorRetryStrategy::Retry => tracing::warn!(
                            "War sync for alliance {} failed, retrying next cycle: {}",
                            config.slug,
                            e
                        ),
                        ErrorRetryStrategy::Fail => {
                            tracing::error!("War sync for alliance {} failed: {}", config.slug, e)
                        }
                    }
                }
            }
        }

        tracing::info!(
            "War poll cycle finished: {} completed, {} skipped, {} failed, {} raid(s) notified",
            report.completed,
            report.skipped,
            report.failed,
            report.notified
        );

        report
    }

    /// Runs one fetch, reconcile and notify pass for an alliance.
    ///
    /// # Returns
    /// - `Ok(PassOutcome::Skipped)` - A pass for the alliance was already running
    /// - `Ok(PassOutcome::Completed)` - Pass completed, notification failures included
    /// - `Err(Error)` - Fetching or persisting failed
    pub async fn run_alliance(&self, config: &AllianceConfig) -> Result<PassOutcome, Error> {
        let Some(_guard) = self.in_flight.try_acquire(config.id) else {
            tracing::info!(
                "Skipping war sync for alliance {}, previous pass still running",
                config.slug
            );
            return Ok(PassOutcome::Skipped);
        };

        let state = self.state_for(config.id);
        let mut state = state.lock().await;
        let now = Utc::now();
        let cutoff = retention_cutoff(now);

        if !state.is_seeded() {
            let persisted = WarRepository::new(&self.db)
                .get_active_raids_since(config.id, cutoff)
                .await?;
            state.seed(&persisted);
            tracing::debug!(
                "Seeded alliance {} with {} known raid(s)",
                config.slug,
                state.len()
            );
        }

        let report = WarSyncService::new(&self.db, &self.client, self.default_api_key.as_deref())
            .sync_alliance(config)
            .await?;

        let pruned = state.prune(cutoff);
        if pruned > 0 {
            tracing::debug!(
                "Pruned {} raid(s) older than the retention window for alliance {}",
                pruned,
                config.slug
            );
        }

        let mut notified = Vec::new();
        match config.raid_channel.as_deref() {
            None => tracing::debug!(
                "Alliance {} has no raid channel, skipping notifications",
                config.slug
            ),
            Some(channel) => {
                let pending: Vec<_> = report
                    .active_raids
                    .iter()
                    .filter(|raid| within_retention(raid.war_started, now))
                    .filter(|raid| !state.is_known(raid.pnw_war_id))
                    .collect();

                let notices: Vec<RaidNotice> = pending
                    .iter()
                    .map(|raid| RaidNotice::new(raid, &config.name))
                    .collect();

                notified = NotificationDispatcher::new(&self.notifier)
                    .dispatch(Some(channel), &notices)
                    .await;

                for raid in pending.iter().filter(|r| notified.contains(&r.pnw_war_id)) {
                    state.record(raid.pnw_war_id, raid.war_started);
                }
            }
        }

        tracing::debug!(
            "Checked alliance {} (previous check: {:?})",
            config.slug,
            state.last_check()
        );
        state.set_last_check(now);

        Ok(PassOutcome::Completed {
            wars: report.updated.len(),
            new_raids: report.new_raids.len(),
            notified,
        })
    }

    fn state_for(&self, alliance_id: i32) -> Arc<tokio::sync::Mutex<AllianceWarState>> {
        let mut states = self
            .states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(states.entry(alliance_id).or_default())
    }
}
