//! Calendar heatmap of check-in levels.
//!
//! Lays out the last N weeks ending today as a grid of week columns and
//! weekday rows (Monday = 0). Days without a check-in have level 0.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::checkin::Ledger;

pub const DEFAULT_HEATMAP_WEEKS: u32 = 16;

/// Ten years; larger requests are clamped.
pub const MAX_HEATMAP_WEEKS: u32 = 520;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A single day in the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    /// Column index counted from the first day of the grid
    pub week: u32,
    /// Monday = 0 .. Sunday = 6
    pub weekday: u32,
    /// Check-in level, 0 when the day has no record
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    pub cells: Vec<HeatmapCell>,
}

impl Heatmap {
    /// Build the grid for `weeks` weeks ending at `today`.
    ///
    /// `weeks` is clamped to [`MAX_HEATMAP_WEEKS`].
    pub fn build(ledger: &Ledger, weeks: u32, today: NaiveDate) -> Self {
        if weeks == 0 {
            return Self::default();
        }
        let weeks = weeks.min(MAX_HEATMAP_WEEKS);

        let levels: HashMap<NaiveDate, u8> =
            ledger.records().iter().map(|r| (r.date, r.level)).collect();

        let span = u64::from(weeks) * 7 - 1;
        let start = today
            .checked_sub_days(Days::new(span))
            .unwrap_or(NaiveDate::MIN);

        let cells = start
            .iter_days()
            .take_while(|d| *d <= today)
            .map(|date| {
                let offset = (date - start).num_days() as u32;
                HeatmapCell {
                    date,
                    week: offset / 7,
                    weekday: date.weekday().num_days_from_monday(),
                    level: levels.get(&date).copied().unwrap_or(0),
                }
            })
            .collect();

        Self { cells }
    }

    pub fn week_count(&self) -> u32 {
        self.cells.last().map_or(0, |c| c.week + 1)
    }

    /// Plain-text grid: one row per weekday, one glyph per week.
    pub fn render_text(&self) -> String {
        let columns = self.week_count() as usize;
        let mut rows = vec![vec![' '; columns]; 7];
        for cell in &self.cells {
            rows[cell.weekday as usize][cell.week as usize] = level_glyph(cell.level);
        }

        rows.iter()
            .zip(WEEKDAY_LABELS)
            .map(|(row, label)| format!("{label} {}", row.iter().collect::<String>()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn level_glyph(level: u8) -> char {
    match level {
        0 => '.',
        1 => '░',
        2 => '▒',
        3 => '▓',
        _ => '█',
    }
}
