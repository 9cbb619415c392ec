use std::time::Duration;

pub mod war {
    use super::*;

    /// Default interval between poll cycles (5 minutes)
    pub const POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

    /// Cron expression for reloading alliance configuration
    /// Runs every hour at the top of the hour
    pub const CONFIG_REFRESH_CRON_EXPRESSION: &str = "0 0 * * * *";
}
