#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use nba_game_digest::discord::Notifier;
use nba_game_digest::error::{FeedError, NotifyError, StoreError};
use nba_game_digest::model::game::GameRecord;
use nba_game_digest::model::stored::StoredGameRecord;
use nba_game_digest::sportsdata::{GameFeed, SportsData};
use nba_game_digest::store::GameStore;

pub fn load_sample() -> String {
    std::fs::read_to_string("tests/sample_games.json").expect("failed to read sample_games.json")
}

/// Feed that answers every date with the same canned body.
pub struct ScriptedFeed {
    body: String,
    pub requested: RefCell<Vec<String>>,
}

impl ScriptedFeed {
    pub fn from_json(body: &str) -> Self {
        Self { body: body.to_string(), requested: RefCell::new(Vec::new()) }
    }
}

impl GameFeed for ScriptedFeed {
    fn games_by_date(&self, date: &str) -> Result<Vec<GameRecord>, FeedError> {
        self.requested.borrow_mut().push(date.to_string());
        SportsData::parse_games(&self.body)
    }
}

/// Upsert store kept in memory, optionally failing on the n-th write (1-based).
#[derive(Default)]
pub struct MemoryStore {
    pub records: BTreeMap<String, StoredGameRecord>,
    pub writes: usize,
    pub fail_on_write: Option<usize>,
    pub fail_scan: bool,
}

impl MemoryStore {
    pub fn failing_on(n: usize) -> Self {
        Self { fail_on_write: Some(n), ..Self::default() }
    }
}

impl GameStore for MemoryStore {
    fn upsert(&mut self, record: &StoredGameRecord) -> Result<(), StoreError> {
        self.writes += 1;
        if self.fail_on_write == Some(self.writes) {
            return Err(StoreError::Unavailable { message: format!("write {} refused", self.writes) });
        }
        self.records.insert(record.game_id.clone(), record.clone());
        Ok(())
    }

    fn scan(&mut self) -> Result<Vec<StoredGameRecord>, StoreError> {
        if self.fail_scan {
            return Err(StoreError::Unavailable { message: "scan refused".to_string() });
        }
        Ok(self.records.values().cloned().collect())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: RefCell<Vec<(String, String)>>,
    pub fail: bool,
}

impl Notifier for RecordingNotifier {
    fn publish(&self, subject: &str, message: &str) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Rejected { message: "topic unavailable".to_string() });
        }
        self.sent.borrow_mut().push((subject.to_string(), message.to_string()));
        Ok(())
    }
}
