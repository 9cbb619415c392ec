use std::{net::SocketAddr, time::Duration};

use crate::server::{
    error::config::ConfigError, scheduler::config::war::POLL_INTERVAL, util::pnw::PNW_GRAPHQL_URL,
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,
    pub pnw_api_url: String,
    /// API key used for alliances without their own
    pub pnw_api_key: Option<String>,
    pub poll_interval: Duration,
    pub listen_addr: SocketAddr,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let require = |var: &str| get(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let poll_interval = match get("WAR_POLL_INTERVAL_MINUTES") {
            None => POLL_INTERVAL,
            Some(value) => match value.trim().parse::<u64>() {
                Ok(minutes) if minutes > 0 => Duration::from_secs(minutes * 60),
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "WAR_POLL_INTERVAL_MINUTES".to_string(),
                        reason: format!("expected a positive number of minutes, got {:?}", value),
                    })
                }
            },
        };

        let listen_addr = get("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            pnw_api_url: get("PNW_API_URL").unwrap_or_else(|| PNW_GRAPHQL_URL.to_string()),
            pnw_api_key: get("PNW_API_KEY"),
            poll_interval,
            listen_addr,
            user_agent: require("USER_AGENT")?,
        })
    }
}
