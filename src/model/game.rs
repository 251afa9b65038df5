use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::UNKNOWN;

/// A single game as returned by the SportsData `GamesByDate` endpoint.
///
/// Every field is optional: the upstream omits or nulls fields freely depending on
/// game state, and nothing downstream is allowed to fail because of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameRecord {
    // Number in the live feed, occasionally a string in replays/fixtures
    #[serde(rename = "GameID")]
    pub game_id: Option<Value>,
    pub status: Option<String>,
    pub away_team: Option<String>,
    pub home_team: Option<String>,
    pub away_team_score: Option<i64>,
    pub home_team_score: Option<i64>,
    pub date_time: Option<String>,
    pub channel: Option<String>,
    pub quarters: Option<Vec<PeriodScore>>,
    pub last_play: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PeriodScore {
    pub number: Option<i64>,
    pub away_score: Option<i64>,
    pub home_score: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
    Other,
}

impl GameStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("Scheduled") => GameStatus::Scheduled,
            Some("InProgress") => GameStatus::InProgress,
            Some("Final") => GameStatus::Final,
            _ => GameStatus::Other,
        }
    }
}

impl GameRecord {
    pub fn status(&self) -> GameStatus {
        GameStatus::from_raw(self.status.as_deref())
    }

    /// Raw status text for display and storage, `Unknown` when absent.
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn away_team_name(&self) -> &str {
        self.away_team.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn home_team_name(&self) -> &str {
        self.home_team.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn channel_name(&self) -> &str {
        self.channel.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn start_time(&self) -> &str {
        self.date_time.as_deref().unwrap_or(UNKNOWN)
    }

    /// Store key for this game. Numbers and strings are both accepted; a missing id
    /// collapses to the `Unknown` placeholder instead of rejecting the record.
    pub fn key(&self) -> String {
        match &self.game_id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Null) | None => UNKNOWN.to_string(),
            Some(other) => other.to_string(),
        }
    }

    pub fn periods(&self) -> &[PeriodScore] {
        self.quarters.as_deref().unwrap_or(&[])
    }
}
