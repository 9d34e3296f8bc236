//! Mood lexicon.
//!
//! Maps the mood-meter vocabulary to a numeric level from 1 (low) to 4
//! (high). Lookups trim whitespace and ignore case. Words outside the
//! vocabulary fall back to level 3 so a lookup never fails.

use serde::{Deserialize, Serialize};

/// The fixed 4x4 mood meter, rows ordered from higher to lower energy.
pub const MOOD_METER: [[&str; 4]; 4] = [
    ["Excited", "Joyful", "Motivated", "Inspired"],
    ["Tense", "Alert", "Engaged", "Proud"],
    ["Sad", "Calm", "Content", "Peaceful"],
    ["Drained", "Tired", "Restful", "Serene"],
];

/// Numeric mood level derived from a mood word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    /// sad, drained, tired, tense, alert
    Low = 1,
    /// calm, restful, peaceful, serene
    Calm = 2,
    /// engaged, content, joyful (and anything unrecognized)
    Content = 3,
    /// excited, motivated, inspired, proud
    High = 4,
}

impl MoodLevel {
    /// Look up the level for a mood word.
    pub fn from_word(word: &str) -> Self {
        Self::lookup(word).unwrap_or(MoodLevel::Content)
    }

    /// Level for a word in the vocabulary, `None` for anything else.
    fn lookup(word: &str) -> Option<Self> {
        let level = match word.trim().to_lowercase().as_str() {
            "sad" | "drained" | "tired" | "tense" | "alert" => MoodLevel::Low,
            "calm" | "restful" | "peaceful" | "serene" => MoodLevel::Calm,
            "engaged" | "content" | "joyful" => MoodLevel::Content,
            "excited" | "motivated" | "inspired" | "proud" => MoodLevel::High,
            _ => return None,
        };
        Some(level)
    }

    /// Integer value in 1..=4.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::Low => "Low",
            MoodLevel::Calm => "Calm",
            MoodLevel::Content => "Content",
            MoodLevel::High => "High",
        }
    }
}

/// Convert a mood word to its numeric level (1-4). Unknown words map to 3.
pub fn mood_to_num(word: &str) -> u8 {
    MoodLevel::from_word(word).value()
}

/// Whether `word` appears on the mood meter.
pub fn is_meter_word(word: &str) -> bool {
    MoodLevel::lookup(word).is_some()
}
