use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use quietbridge_core::storage::{CHECKINS_FILE, MOODS_FILE};
use quietbridge_core::{is_meter_word, CheckinStore, MoodStore, ValidationError};

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Save today's mood (replaces an earlier check-in for the same day)
    Save {
        /// Mood word, e.g. "Calm"
        word: String,
        /// Category used for the level (defaults to the word)
        #[arg(long)]
        mode: Option<String>,
    },
    /// List all check-ins
    List,
    /// Delete all check-ins
    Reset,
}

pub fn run(action: CheckinAction, today: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let checkins = CheckinStore::open(CHECKINS_FILE)?;

    match action {
        CheckinAction::Save { word, mode } => {
            let word = word.trim();
            if word.is_empty() {
                return Err(ValidationError::EmptyMood.into());
            }
            if !is_meter_word(word) {
                tracing::warn!(word = %word, "mood word is not on the mood meter, using level 3");
            }
            let mode = mode.as_deref().map(str::trim).unwrap_or(word);

            let ledger = checkins.load().upsert_today(word, mode, today);
            checkins.save(&ledger)?;

            let moods = MoodStore::open(MOODS_FILE)?;
            let mut log = moods.load();
            log.append(word, Utc::now());
            moods.save(&log)?;

            let record = ledger
                .record_for(today)
                .ok_or("check-in missing after save")?;
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        CheckinAction::List => {
            let ledger = checkins.load();
            println!("{}", serde_json::to_string_pretty(&ledger)?);
        }
        CheckinAction::Reset => {
            checkins.reset()?;
            println!("check-ins cleared");
        }
    }
    Ok(())
}
