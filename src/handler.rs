use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::config::{IngestConfig, StoreConfig};
use crate::discord::Discord;
use crate::error::{ConfigError, IngestError, StoreError};
use crate::fetch::fetch_all;
use crate::ingest::{IngestOutcome, Ingestor};
use crate::model::stored::StoredGameRecord;
use crate::sportsdata::SportsData;
use crate::store::RedisGameStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Test,
    #[default]
    Production,
}

/// Optional knobs on the triggering event. Anything else in the event (scheduler
/// metadata and the like) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub mode: Mode,
}

impl Request {
    /// Events without a `mode` (scheduler payloads, `null`) run in the default mode; a
    /// `mode` that is present but not recognised is rejected.
    pub fn from_event(event: &Value) -> Result<Self, ConfigError> {
        match event.get("mode") {
            None | Some(Value::Null) => Ok(Request::default()),
            Some(raw) => serde_json::from_value::<Mode>(raw.clone())
                .map(|mode| Request { mode })
                .map_err(|_| ConfigError::Invalid {
                    name: "mode",
                    value: raw.as_str().map(str::to_string).unwrap_or_else(|| raw.to_string()),
                }),
        }
    }
}

/// HTTP-style response understood by Lambda function URLs and API Gateway proxies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    pub body: String,
}

impl ApiResponse {
    pub fn text(status_code: u16, body: impl Into<String>) -> Self {
        Self { status_code, headers: None, body: body.into() }
    }

    fn json_with_cors(body: String, allow_methods: Option<&str>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        if let Some(methods) = allow_methods {
            headers.insert("Access-Control-Allow-Methods".to_string(), methods.to_string());
        }
        Self { status_code: 200, headers: Some(headers), body }
    }
}

pub fn ingest_response(result: Result<IngestOutcome, IngestError>) -> ApiResponse {
    match result {
        Ok(IngestOutcome::Published { records, .. }) => {
            match serde_json::to_string(&serde_json::json!({ "data": records })) {
                Ok(body) => ApiResponse::json_with_cors(body, None),
                Err(e) => ApiResponse::text(500, format!("Error encoding response: {}", e)),
            }
        }
        Ok(IngestOutcome::NoGames { .. }) => ApiResponse::text(404, "No games available"),
        Err(e) => ApiResponse::text(500, e.to_string()),
    }
}

pub fn fetch_response(result: Result<Vec<StoredGameRecord>, StoreError>) -> ApiResponse {
    let encoded = result.map_err(|e| e.to_string()).and_then(|records| {
        serde_json::to_string(&records).map_err(|e| e.to_string())
    });
    match encoded {
        Ok(body) => ApiResponse::json_with_cors(body, Some("GET")),
        Err(cause) => {
            error!(error = %cause, "Failed to fetch games");
            ApiResponse::text(500, serde_json::json!({ "error": "Failed to fetch data" }).to_string())
        }
    }
}

pub fn config_error_response(e: &ConfigError) -> ApiResponse {
    error!(error = %e, "Invalid configuration");
    ApiResponse::text(500, format!("Configuration error: {}", e))
}

/// Build the production clients from `config` and run one ingestion. Blocking.
pub fn run_ingest(config: &IngestConfig, mode: Mode, now_utc: DateTime<Utc>) -> ApiResponse {
    let hook_url = match config.webhook_for(mode) {
        Ok(url) => url.to_string(),
        Err(e) => return config_error_response(&e),
    };
    let store = match RedisGameStore::open(&config.store.redis_url, config.store.table.clone()) {
        Ok(store) => store,
        Err(e) => return ingest_response(Err(IngestError::Store(e))),
    };
    let feed = SportsData::new(config.api_base_url.clone(), config.api_key.clone());

    let mut ingestor = Ingestor::new(feed, store, Discord::new(hook_url), config.game_day);
    let result = ingestor.run(now_utc);
    if let Ok(IngestOutcome::Published { date, records }) = &result {
        info!(date = %date, games = records.len(), ?mode, "Ingestion complete");
    }
    ingest_response(result)
}

/// Build the production store from `config` and read every record. Blocking.
pub fn run_fetch(config: &StoreConfig) -> ApiResponse {
    let result = RedisGameStore::open(&config.redis_url, config.table.clone())
        .and_then(|mut store| fetch_all(&mut store));
    fetch_response(result)
}

#[instrument(skip(event))]
pub async fn ingest_handler(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    let request = match Request::from_event(&event.payload) {
        Ok(request) => request,
        Err(e) => return Ok(config_error_response(&e)),
    };
    let config = match IngestConfig::from_env() {
        Ok(config) => config,
        Err(e) => return Ok(config_error_response(&e)),
    };

    // ureq and the sync redis client block; keep them off the runtime's worker threads.
    let task = tokio::task::spawn_blocking(move || run_ingest(&config, request.mode, Utc::now()));
    match task.await {
        Ok(response) => Ok(response),
        Err(e) => {
            error!(error = %e, "Ingestion task join error");
            Ok(ApiResponse::text(500, format!("Ingestion task failed: {}", e)))
        }
    }
}

#[instrument(skip(_event))]
pub async fn fetch_handler(_event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => return Ok(fetch_response(Err(StoreError::Unavailable { message: e.to_string() }))),
    };

    let task = tokio::task::spawn_blocking(move || run_fetch(&config));
    match task.await {
        Ok(response) => Ok(response),
        Err(e) => {
            error!(error = %e, "Fetch task join error");
            Ok(fetch_response(Err(StoreError::Unavailable { message: e.to_string() })))
        }
    }
}
