use crate::model::NOT_AVAILABLE;
use crate::model::game::{GameRecord, GameStatus, PeriodScore};

pub const DIGEST_SEPARATOR: &str = "\n---\n";
pub const NO_GAMES_MESSAGE: &str = "No games available for today.";

/// Render one game as a multi-line, newline-terminated summary. The layout depends only
/// on the status; missing fields are replaced with placeholders.
pub fn format_game(game: &GameRecord) -> String {
    let status = game.status_label();
    let matchup = format!("{} vs {}", game.away_team_name(), game.home_team_name());

    match game.status() {
        GameStatus::Final => format!(
            "Game Status: {}\n{}\nFinal Score: {}\nStart Time: {}\nChannel: {}\nQuarter Scores: {}\n",
            status,
            matchup,
            score_line(game),
            game.start_time(),
            game.channel_name(),
            period_line(game.periods())
        ),
        GameStatus::InProgress => format!(
            "Game Status: {}\n{}\nCurrent Score: {}\nLast Play: {}\nChannel: {}\n",
            status,
            matchup,
            score_line(game),
            game.last_play.as_deref().unwrap_or(NOT_AVAILABLE),
            game.channel_name()
        ),
        GameStatus::Scheduled => format!(
            "Game Status: {}\n{}\nStart Time: {}\nChannel: {}\n",
            status,
            matchup,
            game.start_time(),
            game.channel_name()
        ),
        GameStatus::Other => format!(
            "Game Status: {}\n{}\nDetails are unavailable at the moment.\n",
            status, matchup
        ),
    }
}

/// Join every formatted game into the single notification body.
pub fn build_digest(games: &[GameRecord]) -> String {
    if games.is_empty() {
        return NO_GAMES_MESSAGE.to_string();
    }
    games
        .iter()
        .map(format_game)
        .collect::<Vec<_>>()
        .join(DIGEST_SEPARATOR)
}

fn score_line(game: &GameRecord) -> String {
    format!("{}-{}", or_na(game.away_team_score), or_na(game.home_team_score))
}

fn period_line(periods: &[PeriodScore]) -> String {
    periods
        .iter()
        .map(|p| format!("Q{}: {}-{}", or_na(p.number), or_na(p.away_score), or_na(p.home_score)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_na(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
