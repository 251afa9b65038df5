use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;

/// Fixed shift applied to UTC when no zone is configured: US Central standard time,
/// without DST.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -6;

/// How "today" is derived from the invocation clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameDay {
    /// UTC shifted by a constant number of hours.
    Fixed { hours: i32 },
    /// Local date in an IANA zone, DST-aware.
    Zone(Tz),
}

impl Default for GameDay {
    fn default() -> Self {
        GameDay::Fixed { hours: DEFAULT_UTC_OFFSET_HOURS }
    }
}

impl GameDay {
    pub fn date_for(&self, now_utc: DateTime<Utc>) -> NaiveDate {
        match self {
            GameDay::Fixed { hours } => (now_utc + TimeDelta::hours(i64::from(*hours))).date_naive(),
            GameDay::Zone(tz) => now_utc.with_timezone(tz).date_naive(),
        }
    }

    /// The `YYYY-MM-DD` form used in the upstream URL.
    pub fn date_string(&self, now_utc: DateTime<Utc>) -> String {
        self.date_for(now_utc).format("%Y-%m-%d").to_string()
    }
}
