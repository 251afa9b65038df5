//! Error types for each external boundary and for the ingestion run as a whole.

use thiserror::Error;

/// Failure talking to the upstream games API.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("webhook post failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("notification rejected: {message}")]
    Rejected { message: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Why an ingestion run stopped early. Each variant maps to a 500 response.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Error fetching data: {0}")]
    Fetch(#[source] FeedError),

    #[error("Error pushing data to store: {0}")]
    Store(#[source] StoreError),

    #[error("Error publishing notification: {0}")]
    Notify(#[source] NotifyError),
}
