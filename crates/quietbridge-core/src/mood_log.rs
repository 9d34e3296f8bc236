//! Append-only mood log and the dashboard summary built from it.
//!
//! Every mood save is logged with a timestamp, independent of the
//! one-per-day check-in ledger, so the dashboard can chart the full history.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lexicon::mood_to_num;

/// Number of entries reported in [`MoodSummary::most_frequent`] by default.
pub const DEFAULT_TOP_MOODS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,
    /// Written as RFC 3339; older logs store Unix seconds as a float.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(DateTime<Utc>),
        Epoch(f64),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(ts) => Ok(ts),
        RawTimestamp::Epoch(secs) => from_epoch_seconds(secs)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {secs}"))),
    }
}

fn from_epoch_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    let nanos = (((secs - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos)
}

impl MoodEntry {
    pub fn score(&self) -> u8 {
        mood_to_num(&self.mood)
    }
}

/// Overall reading of the average mood score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodInsight {
    Empty,
    Positive,
    Balanced,
    Tough,
}

impl MoodInsight {
    pub fn from_average(average: Option<f64>) -> Self {
        match average {
            None => MoodInsight::Empty,
            Some(avg) if avg > 3.0 => MoodInsight::Positive,
            Some(avg) if avg > 2.0 => MoodInsight::Balanced,
            Some(_) => MoodInsight::Tough,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoodInsight::Empty => {
                "No mood check-ins yet. Start by logging your mood on the Home page!"
            }
            MoodInsight::Positive => "Predominantly positive moods lately.",
            MoodInsight::Balanced => "Generally balanced moods.",
            MoodInsight::Tough => {
                "Looks like a tougher period. Consider using Reflection or reaching out."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}

/// Dashboard view of the mood log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub total: usize,
    pub average_score: Option<f64>,
    pub most_frequent: Vec<MoodCount>,
    pub insight: MoodInsight,
    pub insight_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn append(&mut self, mood: impl Into<String>, at: DateTime<Utc>) {
        self.entries.push(MoodEntry {
            mood: mood.into(),
            timestamp: at,
        });
    }

    /// Summarise the log, listing up to `top_n` most frequent moods.
    pub fn summary(&self, top_n: usize) -> MoodSummary {
        let average_score = if self.entries.is_empty() {
            None
        } else {
            let total: u32 = self.entries.iter().map(|e| u32::from(e.score())).sum();
            Some(f64::from(total) / self.entries.len() as f64)
        };

        let mut counts: Vec<MoodCount> = Vec::new();
        for entry in &self.entries {
            match counts.iter_mut().find(|c| c.mood == entry.mood) {
                Some(c) => c.count += 1,
                None => counts.push(MoodCount {
                    mood: entry.mood.clone(),
                    count: 1,
                }),
            }
        }
        // Stable sort keeps first-seen order among equal counts.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(top_n);

        let insight = MoodInsight::from_average(average_score);
        MoodSummary {
            total: self.entries.len(),
            average_score,
            most_frequent: counts,
            insight,
            insight_message: insight.message().to_string(),
        }
    }
}

/// One-line note on how the user engages, from mood saves and chat messages.
pub fn engagement_note(mood_count: usize, chat_count: usize) -> &'static str {
    if chat_count >= 2 {
        "You tend to reach out when you check in."
    } else if mood_count >= 3 {
        "You have been checking in consistently."
    } else if mood_count > 0 {
        "You have started tracking your mood."
    } else {
        "Start with one check-in. That is enough for today."
    }
}
