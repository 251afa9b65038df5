use std::collections::HashMap;

use nba_game_digest::config::{IngestConfig, StoreConfig, DEFAULT_REDIS_URL, DEFAULT_SPORTSDATA_BASE_URL};
use nba_game_digest::day::GameDay;
use nba_game_digest::error::ConfigError;
use nba_game_digest::handler::Mode;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name: &str| map.get(name).cloned()
}

const BASE: &[(&str, &str)] = &[
    ("NBA_API_KEY", "secret"),
    ("NOTIFY_WEBHOOK_URL", "https://example.invalid/prod"),
    ("GAMES_TABLE", "  NBARESULTS \n"),
];

#[test]
fn ingest_config_applies_defaults() {
    let config = IngestConfig::from_lookup(lookup(BASE)).expect("valid config");

    assert_eq!(config.api_key, "secret");
    assert_eq!(config.api_base_url, DEFAULT_SPORTSDATA_BASE_URL);
    assert_eq!(config.game_day, GameDay::Fixed { hours: -6 });
    assert_eq!(config.store.table, "NBARESULTS");
    assert_eq!(config.store.redis_url, DEFAULT_REDIS_URL);
    assert_eq!(config.test_webhook_url, None);
}

#[test]
fn both_functions_share_the_table_setting() {
    let ingest = IngestConfig::from_lookup(lookup(BASE)).expect("ingest config");
    let fetch = StoreConfig::from_lookup(lookup(BASE)).expect("store config");
    assert_eq!(ingest.store, fetch);
}

#[test]
fn missing_required_values_are_reported_by_name() {
    let err = IngestConfig::from_lookup(lookup(&[("NBA_API_KEY", "k"), ("GAMES_TABLE", "t")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { name: "NOTIFY_WEBHOOK_URL" });

    let err = StoreConfig::from_lookup(lookup(&[("GAMES_TABLE", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { name: "GAMES_TABLE" });
}

#[test]
fn offset_and_timezone_are_configurable() {
    let mut pairs = BASE.to_vec();
    pairs.push(("GAMES_UTC_OFFSET_HOURS", "-5"));
    let config = IngestConfig::from_lookup(lookup(&pairs)).expect("offset config");
    assert_eq!(config.game_day, GameDay::Fixed { hours: -5 });

    pairs.push(("GAMES_TIMEZONE", "America/Chicago"));
    let config = IngestConfig::from_lookup(lookup(&pairs)).expect("zone config");
    assert_eq!(config.game_day, GameDay::Zone(chrono_tz::America::Chicago));
}

#[test]
fn invalid_offset_and_timezone_are_rejected() {
    let mut pairs = BASE.to_vec();
    pairs.push(("GAMES_UTC_OFFSET_HOURS", "30"));
    assert!(matches!(
        IngestConfig::from_lookup(lookup(&pairs)),
        Err(ConfigError::Invalid { name: "GAMES_UTC_OFFSET_HOURS", .. })
    ));

    let mut pairs = BASE.to_vec();
    pairs.push(("GAMES_TIMEZONE", "Mars/Olympus"));
    assert!(matches!(
        IngestConfig::from_lookup(lookup(&pairs)),
        Err(ConfigError::Invalid { name: "GAMES_TIMEZONE", .. })
    ));
}

#[test]
fn test_mode_needs_its_own_webhook() {
    let config = IngestConfig::from_lookup(lookup(BASE)).expect("valid config");
    assert_eq!(config.webhook_for(Mode::Production), Ok("https://example.invalid/prod"));
    assert_eq!(config.webhook_for(Mode::Test), Err(ConfigError::Missing { name: "TEST_NOTIFY_WEBHOOK_URL" }));

    let mut pairs = BASE.to_vec();
    pairs.push(("TEST_NOTIFY_WEBHOOK_URL", "https://example.invalid/test"));
    let config = IngestConfig::from_lookup(lookup(&pairs)).expect("valid config");
    assert_eq!(config.webhook_for(Mode::Test), Ok("https://example.invalid/test"));
}

#[test]
fn extreme_offsets_are_rejected_without_overflow() {
    for raw in ["-2147483648", "2147483647", "24", "-24"] {
        let mut pairs = BASE.to_vec();
        pairs.push(("GAMES_UTC_OFFSET_HOURS", raw));
        assert_eq!(
            IngestConfig::from_lookup(lookup(&pairs)),
            Err(ConfigError::Invalid { name: "GAMES_UTC_OFFSET_HOURS", value: raw.to_string() })
        );
    }

    let mut pairs = BASE.to_vec();
    pairs.push(("GAMES_UTC_OFFSET_HOURS", "-23"));
    assert_eq!(IngestConfig::from_lookup(lookup(&pairs)).unwrap().game_day, GameDay::Fixed { hours: -23 });
}
