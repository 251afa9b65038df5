//! Environment configuration shared by both Lambda functions.

use std::env;

use chrono_tz::Tz;

use crate::day::GameDay;
use crate::error::ConfigError;
use crate::handler::Mode;

pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_SPORTSDATA_BASE_URL: &str = "https://api.sportsdata.io/v3/nba/scores/json";

/// Where game records are persisted. Both the ingest and the fetch function read this
/// from the same variables so they can never point at different tables.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub redis_url: String,
    pub table: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngestConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub webhook_url: String,
    pub test_webhook_url: Option<String>,
    pub game_day: GameDay,
    pub store: StoreConfig,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table = required(&lookup, "GAMES_TABLE")?;
        let redis_url = optional(&lookup, "REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string());
        Ok(StoreConfig { redis_url, table })
    }
}

impl IngestConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, "NBA_API_KEY")?;
        let webhook_url = required(&lookup, "NOTIFY_WEBHOOK_URL")?;
        let test_webhook_url = optional(&lookup, "TEST_NOTIFY_WEBHOOK_URL");
        let api_base_url = optional(&lookup, "SPORTSDATA_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SPORTSDATA_BASE_URL.to_string());
        let game_day = game_day(&lookup)?;
        let store = StoreConfig::from_lookup(&lookup)?;

        Ok(IngestConfig { api_key, api_base_url, webhook_url, test_webhook_url, game_day, store })
    }

    /// Webhook the digest goes to for the requested mode.
    pub fn webhook_for(&self, mode: Mode) -> Result<&str, ConfigError> {
        match mode {
            Mode::Production => Ok(&self.webhook_url),
            Mode::Test => self
                .test_webhook_url
                .as_deref()
                .ok_or(ConfigError::Missing { name: "TEST_NOTIFY_WEBHOOK_URL" }),
        }
    }
}

fn game_day<F>(lookup: &F) -> Result<GameDay, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(zone) = optional(lookup, "GAMES_TIMEZONE") {
        return zone
            .parse::<Tz>()
            .map(GameDay::Zone)
            .map_err(|_| ConfigError::Invalid { name: "GAMES_TIMEZONE", value: zone });
    }
    match optional(lookup, "GAMES_UTC_OFFSET_HOURS") {
        None => Ok(GameDay::default()),
        Some(raw) => match raw.parse::<i32>() {
            Ok(hours) if (-23..=23).contains(&hours) => Ok(GameDay::Fixed { hours }),
            _ => Err(ConfigError::Invalid { name: "GAMES_UTC_OFFSET_HOURS", value: raw }),
        },
    }
}

// Values are trimmed; a blank value counts as unset.
fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::Missing { name })
}
