//! Durable storage of projected game records.
//!
//! The table is a Redis hash: one field per `GameID`, each value the JSON form of a
//! [`StoredGameRecord`]. `HSET` overwrites an existing field, which gives upsert-by-key;
//! `HVALS` returns every record in one round trip.

use redis::{Commands, ConnectionLike};
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::model::stored::StoredGameRecord;

pub trait GameStore {
    /// Insert or overwrite the record sharing `record.game_id`.
    fn upsert(&mut self, record: &StoredGameRecord) -> Result<(), StoreError>;

    /// Every stored record, unfiltered and unordered.
    fn scan(&mut self) -> Result<Vec<StoredGameRecord>, StoreError>;
}

/// Redis-backed table. Production uses a [`redis::Client`], which opens a connection per
/// command so nothing touches the network until the first read or write.
pub struct RedisGameStore<C = redis::Client> {
    conn: C,
    table: String,
}

impl RedisGameStore<redis::Client> {
    /// Validate the URL; no connection is made until the first command.
    pub fn open(redis_url: &str, table: impl Into<String>) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self::from_connection(client, table))
    }
}

impl<C: ConnectionLike> RedisGameStore<C> {
    pub fn from_connection(conn: C, table: impl Into<String>) -> Self {
        Self { conn, table: table.into() }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl<C: ConnectionLike> GameStore for RedisGameStore<C> {
    #[instrument(level = "debug", skip(self, record), fields(table = %self.table, game_id = %record.game_id))]
    fn upsert(&mut self, record: &StoredGameRecord) -> Result<(), StoreError> {
        let value = serde_json::to_string(record)?;
        let _: () = self.conn.hset(&self.table, &record.game_id, value)?;
        debug!("Upserted game");
        Ok(())
    }

    #[instrument(level = "info", skip(self), fields(table = %self.table))]
    fn scan(&mut self) -> Result<Vec<StoredGameRecord>, StoreError> {
        let values: Vec<String> = self.conn.hvals(&self.table)?;
        let records = values
            .iter()
            .map(|v| serde_json::from_str::<StoredGameRecord>(v))
            .collect::<Result<Vec<_>, _>>()?;
        info!(records = records.len(), "Scanned game table");
        Ok(records)
    }
}
