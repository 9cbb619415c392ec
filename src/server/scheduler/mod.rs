//! Scheduler for the periodic war poll.
//!
//! On start the alliance configuration is loaded and a first poll cycle is spawned right away.
//! After that a repeated job runs a cycle every poll interval and a cron job reloads the
//! configuration every hour. Both jobs share one [`WarMonitor`].

use std::{future::Future, sync::Arc, time::Duration};

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, notify::RaidNotifier};

pub mod config;
pub mod guard;
pub mod monitor;
pub mod state;

#[cfg(test)]
mod tests;

use self::{config::war as war_config, monitor::WarMonitor};

/// Job scheduler driving the [`WarMonitor`].
pub struct Scheduler<N: RaidNotifier + 'static> {
    monitor: Arc<WarMonitor<N>>,
    poll_interval: Duration,
    sched: JobScheduler,
}

impl<N: RaidNotifier + 'static> Scheduler<N> {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `monitor` - Monitor running the per-alliance passes
    /// - `poll_interval` - Time between poll cycles
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Scheduler created
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(monitor: Arc<WarMonitor<N>>, poll_interval: Duration) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            monitor,
            poll_interval,
            sched,
        })
    }

    /// Loads the alliance configuration, registers the jobs and starts the scheduler.
    ///
    /// A failed initial configuration load is logged, the hourly refresh retries it.
    ///
    /// # Returns
    /// - `Ok(JobScheduler)` - Running scheduler, kept by the caller for shutdown
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<JobScheduler, Error> {
        match self.monitor.refresh_configs().await {
            Ok(count) => tracing::info!("Monitoring wars for {} alliance(s)", count),
            Err(e) => tracing::error!("Failed to load alliance configuration: {}", e),
        }

        let monitor = Arc::clone(&self.monitor);
        tokio::spawn(async move {
            monitor.run_cycle().await;
        });

        self.schedule_poll().await?;

        self.schedule_job(
            war_config::CONFIG_REFRESH_CRON_EXPRESSION,
            "alliance configuration",
            |monitor| async move { monitor.refresh_configs().await },
        )
        .await?;

        self.sched.start().await?;

        Ok(self.sched)
    }

    async fn schedule_poll(&mut self) -> Result<(), Error> {
        let monitor = Arc::clone(&self.monitor);

        self.sched
            .add(Job::new_repeated_async(self.poll_interval, move |_, _| {
                let monitor = Arc::clone(&monitor);

                Box::pin(async move {
                    monitor.run_cycle().await;
                })
            })?)
            .await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job runs (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Name used in log messages
    /// - `function` - Async function run against the monitor, returning a count to log
    ///
    /// # Returns
    /// - `Ok(())` - Job registered
    /// - `Err(Error)` - Invalid cron expression or scheduler error
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(Arc<WarMonitor<N>>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let monitor = Arc::clone(&self.monitor);
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let monitor = Arc::clone(&monitor);
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(monitor).await {
                        Ok(count) => tracing::debug!("Refreshed {}: {} entries", name, count),
                        Err(e) => tracing::error!("Error refreshing {}: {}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
