pub mod config;
pub mod day;
pub mod discord;
pub mod error;
pub mod fetch;
pub mod format;
pub mod handler;
pub mod ingest;
pub mod model;
pub mod sportsdata;
pub mod store;

/// JSON logs for CloudWatch: no ANSI, no timestamps (the platform adds them), no target.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
}
