//! Check-in streaks with grace-day tolerance.
//!
//! A streak is a run of check-in days where gaps of up to `grace_days`
//! consecutive missed days are tolerated. A tolerated gap that is followed
//! by another check-in counts towards the streak length; misses before the
//! first check-in of a run, or after its last one, do not.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ledger::Ledger;

/// How many consecutive missed days a streak survives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GracePolicy {
    /// Any missed day breaks the streak
    Strict,
    /// One missed day is forgiven
    #[default]
    Gentle,
    /// Explicit number of grace days
    Custom(u32),
}

impl GracePolicy {
    pub fn grace_days(self) -> u32 {
        match self {
            GracePolicy::Strict => 0,
            GracePolicy::Gentle => 1,
            GracePolicy::Custom(days) => days,
        }
    }
}

/// Current and best streak lengths in days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    pub current: u32,
    pub best: u32,
}

/// Encouragement tier for the current streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakVibe {
    StartToday,
    GoodStart,
    NiceMomentum,
    StrongWeek,
}

impl StreakVibe {
    pub fn from_current(current: u32) -> Self {
        match current {
            0 => StreakVibe::StartToday,
            1..=2 => StreakVibe::GoodStart,
            3..=6 => StreakVibe::NiceMomentum,
            _ => StreakVibe::StrongWeek,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StreakVibe::StartToday => "Start today",
            StreakVibe::GoodStart => "Good start",
            StreakVibe::NiceMomentum => "Nice momentum",
            StreakVibe::StrongWeek => "Strong week",
        }
    }
}

/// Length of the run that starts `start` days away from the first hit.
///
/// `hits` yields check-in dates moving away from `start` (descending when
/// walking back from today, ascending when walking forward). Equivalent to
/// stepping one day at a time and stopping once more than `grace_days`
/// consecutive days are missing, but only visits check-in dates.
fn run_length(
    start: NaiveDate,
    hits: impl Iterator<Item = NaiveDate>,
    grace_days: u32,
) -> u32 {
    let grace = i64::from(grace_days);
    let mut length = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for hit in hits {
        let missed = match prev {
            // Leading misses count against the grace but not the length.
            None => (hit - start).num_days().abs(),
            Some(p) => (hit - p).num_days().abs() - 1,
        };
        if missed > grace {
            break;
        }
        if prev.is_some() {
            length += missed as u32;
        }
        length += 1;
        prev = Some(hit);
    }

    length
}

impl Ledger {
    /// Current streak ending at `today` and best streak over the whole ledger.
    pub fn streaks(&self, grace_days: u32, today: NaiveDate) -> Streaks {
        let days = self.dates();
        if days.is_empty() {
            return Streaks::default();
        }

        let current = run_length(today, days.range(..=today).rev().copied(), grace_days);
        let best = days
            .iter()
            .map(|&start| run_length(start, days.range(start..).copied(), grace_days))
            .max()
            .unwrap_or(0);

        Streaks { current, best }
    }
}
