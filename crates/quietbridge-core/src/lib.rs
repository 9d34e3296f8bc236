//! # QuietBridge Core Library
//!
//! This library provides the core logic for QuietBridge, a small mood
//! check-in companion. All computation is available through the standalone
//! CLI binary, which owns the clock and the data files; the library itself
//! never reads the system clock.
//!
//! ## Architecture
//!
//! - **Lexicon**: mood-meter vocabulary and its 1-4 level mapping
//! - **Check-in ledger**: one record per day, streaks with grace days,
//!   weekly progress and a trailing mood aggregate (pure functions)
//! - **Heatmap / mood log**: dashboard views over the stored history
//! - **Storage**: JSON data files and TOML configuration
//!
//! ## Key Components
//!
//! - [`Ledger`]: check-in collection and its queries
//! - [`StreakCard`]: one-call summary for the home screen
//! - [`MoodLog`]: append-only mood history for the dashboard
//! - [`Config`]: application configuration management

pub mod checkin;
pub mod error;
pub mod heatmap;
pub mod lexicon;
pub mod mood_log;
pub mod storage;

pub use checkin::{
    parse_date, CheckinRecord, GracePolicy, Ledger, StreakCard, StreakCardConfig, StreakVibe,
    Streaks, TrailingAggregate, WeekProgress,
};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use heatmap::{Heatmap, HeatmapCell, MAX_HEATMAP_WEEKS};
pub use lexicon::{is_meter_word, mood_to_num, MoodLevel, MOOD_METER};
pub use mood_log::{engagement_note, MoodEntry, MoodInsight, MoodLog, MoodSummary};
pub use storage::{CheckinStore, Config, JsonStore, MoodStore};
