//! Daily mood check-ins.
//!
//! - [`Ledger`]: one [`CheckinRecord`] per date, with upsert and queries
//! - [`Streaks`]: current/best streaks under a [`GracePolicy`]
//! - [`StreakCard`]: everything the home screen shows, built in one pass

mod card;
mod ledger;
mod streak;

pub use card::{StreakCard, StreakCardConfig};
pub use ledger::{
    CheckinRecord, Ledger, TrailingAggregate, WeekProgress, DEFAULT_TRAILING_WINDOW_DAYS,
};
pub use streak::{GracePolicy, StreakVibe, Streaks};

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Parse a caller-supplied `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidDate {
            value: value.to_string(),
        }
    })
}
