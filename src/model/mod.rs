pub mod game;
pub mod stored;

/// Substituted for any absent text field (team, status, channel, identifier).
pub const UNKNOWN: &str = "Unknown";
/// Substituted for any absent score or play description.
pub const NOT_AVAILABLE: &str = "N/A";
