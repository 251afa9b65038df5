use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

use crate::day::GameDay;
use crate::discord::Notifier;
use crate::error::IngestError;
use crate::format::build_digest;
use crate::model::stored::StoredGameRecord;
use crate::sportsdata::GameFeed;
use crate::store::GameStore;

pub const DIGEST_SUBJECT: &str = "NBA Game Updates";

/// Result of a run that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// Every game was written and the digest was published.
    Published { date: String, records: Vec<StoredGameRecord> },
    /// Upstream had no games for the date; nothing was written or published.
    NoGames { date: String },
}

/// Fetch, format, persist and notify for one day. Owns its collaborators so tests can
/// hand in fakes and inspect them afterwards.
pub struct Ingestor<F, S, N> {
    feed: F,
    store: S,
    notifier: N,
    game_day: GameDay,
}

impl<F, S, N> Ingestor<F, S, N>
where
    F: GameFeed,
    S: GameStore,
    N: Notifier,
{
    pub fn new(feed: F, store: S, notifier: N, game_day: GameDay) -> Self {
        Self { feed, store, notifier, game_day }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run the whole workflow for the day `now_utc` falls on.
    ///
    /// Steps are strictly sequential. A failed write stops the loop but leaves earlier
    /// writes in place, and a failed publish happens after all writes have landed; neither
    /// is rolled back.
    #[instrument(level = "info", skip(self))]
    pub fn run(&mut self, now_utc: DateTime<Utc>) -> Result<IngestOutcome, IngestError> {
        let date = self.game_day.date_string(now_utc);

        let games = self.feed.games_by_date(&date).map_err(|e| {
            error!(error = %e, date = %date, "Fetching games failed");
            IngestError::Fetch(e)
        })?;
        if games.is_empty() {
            info!(date = %date, "No games returned");
            return Ok(IngestOutcome::NoGames { date });
        }

        let digest = build_digest(&games);

        let mut records = Vec::with_capacity(games.len());
        for game in &games {
            let record = StoredGameRecord::project(game, now_utc);
            if let Err(e) = self.store.upsert(&record) {
                error!(error = %e, game_id = %record.game_id, written = records.len(), "Store write failed");
                return Err(IngestError::Store(e));
            }
            records.push(record);
        }
        info!(date = %date, written = records.len(), "Persisted games");

        if let Err(e) = self.notifier.publish(DIGEST_SUBJECT, &digest) {
            error!(error = %e, "Publishing digest failed");
            return Err(IngestError::Notify(e));
        }
        info!(bytes = digest.len(), "Published digest");

        Ok(IngestOutcome::Published { date, records })
    }
}
