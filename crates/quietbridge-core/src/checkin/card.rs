//! Streak card summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ledger::{Ledger, TrailingAggregate, WeekProgress, DEFAULT_TRAILING_WINDOW_DAYS};
use super::streak::{GracePolicy, StreakVibe, Streaks};

/// Parameters for building a [`StreakCard`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakCardConfig {
    /// Missed-day tolerance for streaks
    pub grace: GracePolicy,

    /// Check-ins per week to aim for
    pub weekly_goal: i32,

    /// Days covered by the mood aggregate
    pub trailing_window_days: u32,
}

impl Default for StreakCardConfig {
    fn default() -> Self {
        Self {
            grace: GracePolicy::Gentle,
            weekly_goal: 5,
            trailing_window_days: DEFAULT_TRAILING_WINDOW_DAYS,
        }
    }
}

/// Everything shown on the daily check-in card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakCard {
    pub date: NaiveDate,
    pub checked_in_today: bool,
    pub grace_days: u32,
    pub streaks: Streaks,
    pub week: WeekProgress,
    pub week_percent: u32,
    pub recent: TrailingAggregate,
    pub vibe: StreakVibe,
    pub vibe_label: String,
}

impl StreakCard {
    pub fn build(ledger: &Ledger, config: &StreakCardConfig, today: NaiveDate) -> Self {
        let grace_days = config.grace.grace_days();
        let streaks = ledger.streaks(grace_days, today);
        let week = ledger.week_progress(config.weekly_goal, today);
        let vibe = StreakVibe::from_current(streaks.current);

        Self {
            date: today,
            checked_in_today: ledger.checked_in_today(today),
            grace_days,
            streaks,
            week,
            week_percent: week.percent(),
            recent: ledger.trailing_aggregate(today, config.trailing_window_days),
            vibe,
            vibe_label: vibe.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_card() {
        let card = StreakCard::build(&Ledger::new(), &StreakCardConfig::default(), day("2024-05-10"));
        assert!(!card.checked_in_today);
        assert_eq!(card.streaks, Streaks::default());
        assert_eq!(card.week.count, 0);
        assert_eq!(card.week_percent, 0);
        assert!(card.recent.avg_level.is_none());
        assert_eq!(card.vibe, StreakVibe::StartToday);
    }

    #[test]
    fn test_card_after_three_days() {
        // 2024-05-08..10 are Wed..Fri of the same ISO week.
        let ledger = Ledger::new()
            .upsert_today("Calm", "Calm", day("2024-05-08"))
            .upsert_today("Proud", "Proud", day("2024-05-09"))
            .upsert_today("Proud", "Proud", day("2024-05-10"));
        let config = StreakCardConfig {
            grace: GracePolicy::Strict,
            ..Default::default()
        };
        let card = StreakCard::build(&ledger, &config, day("2024-05-10"));

        assert!(card.checked_in_today);
        assert_eq!(card.grace_days, 0);
        assert_eq!(card.streaks, Streaks { current: 3, best: 3 });
        assert_eq!(card.week.count, 3);
        assert_eq!(card.week_percent, 60);
        assert_eq!(card.recent.top_word.as_deref(), Some("Proud"));
        assert_eq!(card.vibe_label, "Nice momentum");
    }
}
