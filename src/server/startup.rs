use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    notify::{discord::DiscordNotifier, RaidNotifier},
    pnw::PnwClient,
    scheduler::{guard::InFlight, monitor::WarMonitor, Scheduler},
};

/// Build the Politics & War client with the configured endpoint and user agent
pub fn build_pnw_client(config: &Config) -> Result<PnwClient, Error> {
    let client = PnwClient::builder()
        .base_url(&config.pnw_api_url)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(client)
}

/// Build the Discord notifier authenticated with the bot token
pub fn build_notifier(config: &Config) -> DiscordNotifier {
    DiscordNotifier::from_token(&config.discord_bot_token)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the shared application state for the HTTP layer
pub fn build_app_state(
    config: &Config,
    db: DatabaseConnection,
    pnw_client: PnwClient,
    in_flight: InFlight,
) -> AppState {
    AppState {
        db,
        pnw_client,
        default_api_key: config.pnw_api_key.as_deref().map(Arc::from),
        in_flight,
    }
}

/// Start the war poll scheduler
///
/// Returns the running job scheduler so the caller can shut it down.
pub async fn start_scheduler<N: RaidNotifier + 'static>(
    config: &Config,
    db: DatabaseConnection,
    pnw_client: PnwClient,
    notifier: N,
    in_flight: InFlight,
) -> Result<tokio_cron_scheduler::JobScheduler, Error> {
    let monitor = WarMonitor::new(
        db,
        pnw_client,
        notifier,
        config.pnw_api_key.as_deref().map(Arc::from),
        in_flight,
    );

    Scheduler::new(Arc::new(monitor), config.poll_interval)
        .await?
        .start()
        .await
}
