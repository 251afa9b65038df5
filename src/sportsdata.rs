use serde_json::Value;
use tracing::{error, info, info_span, instrument};

use crate::error::FeedError;
use crate::model::game::GameRecord;

/// Source of a day's games. The production implementation is [`SportsData`]; tests
/// substitute a scripted feed.
pub trait GameFeed {
    /// Games scheduled on `date` (`YYYY-MM-DD`). An empty vec means the upstream had
    /// nothing for that day.
    fn games_by_date(&self, date: &str) -> Result<Vec<GameRecord>, FeedError>;
}

/// Client for the SportsData scores API.
#[derive(Debug, Clone)]
pub struct SportsData {
    base_url: String,
    api_key: String,
}

impl SportsData {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), api_key: api_key.into() }
    }

    /// Request path without the credential; safe to log.
    pub fn endpoint(&self, date: &str) -> String {
        format!("{}/GamesByDate/{}", self.base_url, date)
    }

    /// Decode a raw `GamesByDate` body. A blank body, `null`, `[]` or `{}` is "no games";
    /// any other non-array is an error.
    pub fn parse_games(body: &str) -> Result<Vec<GameRecord>, FeedError> {
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str::<Value>(body)? {
            Value::Null => Ok(Vec::new()),
            Value::Object(map) if map.is_empty() => Ok(Vec::new()),
            other => Ok(serde_json::from_value::<Vec<GameRecord>>(other)?),
        }
    }
}

impl GameFeed for SportsData {
    #[instrument(level = "info", skip(self))]
    fn games_by_date(&self, date: &str) -> Result<Vec<GameRecord>, FeedError> {
        let endpoint = self.endpoint(date);
        let url = format!("{}?key={}", endpoint, self.api_key);
        let response_result = {
            let _span = info_span!("sportsdata_fetch", url = %endpoint).entered();
            ureq::get(&url).call()
        };
        let response = match response_result {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, url = %endpoint, "GamesByDate request failed");
                return Err(e.into());
            }
        };

        let body = match response.into_body().read_to_string() {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Failed to read GamesByDate response body");
                return Err(e.into());
            }
        };

        match Self::parse_games(&body) {
            Ok(games) => {
                info!(games = games.len(), bytes = body.len(), "Fetched games");
                Ok(games)
            }
            Err(e) => {
                error!(error = %e, "Failed to deserialize GamesByDate response");
                Err(e)
            }
        }
    }
}
