//! Daily check-in records and the ledger that holds them.
//!
//! The ledger keeps at most one record per calendar date. Every operation
//! is pure: it borrows the ledger, takes "today" from the caller and returns
//! a new ledger or a derived value.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::lexicon::mood_to_num;

/// Default window for [`Ledger::trailing_aggregate`].
pub const DEFAULT_TRAILING_WINDOW_DAYS: u32 = 7;

/// One mood check-in for a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinRecord {
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Mood word the user picked
    pub word: String,

    /// Category used to derive `level`
    pub mode: String,

    /// Numeric level (1-4) derived from `mode`
    pub level: u8,
}

impl CheckinRecord {
    /// Build a record, deriving `level` from `mode`.
    pub fn new(date: NaiveDate, word: impl Into<String>, mode: impl Into<String>) -> Self {
        let mode = mode.into();
        Self {
            date,
            word: word.into(),
            level: mood_to_num(&mode),
            mode,
        }
    }
}

/// Count of distinct check-in days in the current ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekProgress {
    pub count: u32,
    pub goal: i32,
}

impl WeekProgress {
    /// Progress towards the goal as a whole percentage, capped at 100.
    /// A non-positive goal reads as 0%.
    pub fn percent(&self) -> u32 {
        if self.goal <= 0 {
            return 0;
        }
        let pct = (100.0 * f64::from(self.count) / f64::from(self.goal)).round();
        pct.min(100.0) as u32
    }
}

/// Mean level and most frequent word over a trailing window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailingAggregate {
    pub avg_level: Option<f64>,
    pub top_word: Option<String>,
}

/// Collection of check-in records, one per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<CheckinRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records loaded from storage.
    pub fn from_records(records: Vec<CheckinRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CheckinRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CheckinRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct dates that have a record.
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// The record stored for `date`, if any.
    pub fn record_for(&self, date: NaiveDate) -> Option<&CheckinRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    pub fn checked_in_today(&self, today: NaiveDate) -> bool {
        self.record_for(today).is_some()
    }

    /// Record a check-in for `today`, replacing any existing one.
    ///
    /// The returned ledger holds exactly one record for `today`, every other
    /// record untouched, sorted by date ascending.
    pub fn upsert_today(&self, word: &str, mode: &str, today: NaiveDate) -> Ledger {
        let mut records: Vec<CheckinRecord> = self
            .records
            .iter()
            .filter(|r| r.date != today)
            .cloned()
            .collect();
        records.push(CheckinRecord::new(today, word, mode));
        records.sort_by_key(|r| r.date);
        Ledger { records }
    }

    /// Distinct check-in dates in the same Monday-start ISO week as `today`.
    pub fn week_progress(&self, goal: i32, today: NaiveDate) -> WeekProgress {
        let week = today.iso_week();
        let count = self
            .dates()
            .into_iter()
            .filter(|d| d.iso_week() == week)
            .count();
        WeekProgress {
            count: count as u32,
            goal,
        }
    }

    /// Summarise records dated within `window_days` days ending at `today`.
    pub fn trailing_aggregate(&self, today: NaiveDate, window_days: u32) -> TrailingAggregate {
        if window_days == 0 {
            return TrailingAggregate::default();
        }
        let start = today
            .checked_sub_days(Days::new(u64::from(window_days - 1)))
            .unwrap_or(NaiveDate::MIN);

        let window: Vec<&CheckinRecord> = self
            .records
            .iter()
            .filter(|r| r.date >= start && r.date <= today)
            .collect();
        if window.is_empty() {
            return TrailingAggregate::default();
        }

        let total: u32 = window.iter().map(|r| u32::from(r.level)).sum();
        let avg_level = f64::from(total) / window.len() as f64;

        TrailingAggregate {
            avg_level: Some(avg_level),
            top_word: most_frequent_word(&window),
        }
    }
}

/// Highest-count non-empty word; ties go to the word seen first.
fn most_frequent_word(records: &[&CheckinRecord]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in records {
        if record.word.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(w, _)| *w == record.word) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.word.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (word, n) in counts {
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((word, n));
        }
    }
    best.map(|(w, _)| w.to_string())
}
