use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::model::game::GameRecord;

/// The persisted projection of a [`GameRecord`]. Period scores and the last play are
/// deliberately not carried over; field names match what the web front-end reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoredGameRecord {
    #[serde(rename = "GameID")]
    pub game_id: String,
    pub date_time: Option<String>,
    pub status: String,
    pub away_team: String,
    pub home_team: String,
    pub start_time: String,
    pub channel: String,
    pub last_updated: String,
}

impl StoredGameRecord {
    pub fn project(game: &GameRecord, updated_at: DateTime<Utc>) -> Self {
        StoredGameRecord {
            game_id: game.key(),
            date_time: game.date_time.clone(),
            status: game.status_label().to_string(),
            away_team: game.away_team_name().to_string(),
            home_team: game.home_team_name().to_string(),
            start_time: game.start_time().to_string(),
            channel: game.channel_name().to_string(),
            last_updated: updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
