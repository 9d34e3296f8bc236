//! Whole-file JSON persistence for the check-in ledger and mood log.
//!
//! Each store owns one file holding a pretty-printed JSON array. Loading is
//! lenient: a missing file is an empty collection, and so is a file that no
//! longer parses. An unparsable file is moved aside to `<name>.corrupt`
//! first, so the next save cannot destroy it. Saving rewrites the whole file.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::checkin::Ledger;
use crate::error::{Result, StorageError};
use crate::mood_log::MoodLog;

pub const CHECKINS_FILE: &str = "checkins.json";
pub const MOODS_FILE: &str = "moods.json";

/// Store for the one-per-day check-in ledger.
pub type CheckinStore = JsonStore<Ledger>;

/// Store for the append-only mood log.
pub type MoodStore = JsonStore<MoodLog>;

#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Store for `file_name` inside the data directory.
    pub fn open(file_name: &str) -> Result<Self> {
        Ok(Self::new(data_dir()?.join(file_name)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection, falling back to an empty one.
    pub fn load(&self) -> T {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet");
                return T::default();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read data file");
                return T::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "data file is not valid JSON, starting empty"
                );
                self.quarantine();
                T::default()
            }
        }
    }

    /// Path an unparsable data file is moved to.
    pub fn corrupt_path(&self) -> PathBuf {
        self.path.with_extension("json.corrupt")
    }

    fn quarantine(&self) {
        let target = self.corrupt_path();
        match std::fs::rename(&self.path, &target) {
            Ok(()) => {
                tracing::warn!(path = %target.display(), "moved unreadable data file aside");
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to move unreadable data file aside"
                );
            }
        }
    }

    /// Persist the whole collection.
    pub fn save(&self, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        let tmp = self.path.with_extension("json.tmp");

        std::fs::write(&tmp, content)
            .and_then(|_| std::fs::rename(&tmp, &self.path))
            .map_err(|e| StorageError::WriteFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %self.path.display(), "saved data file");
        Ok(())
    }

    /// Replace the stored collection with an empty one.
    pub fn reset(&self) -> Result<()> {
        self.save(&T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckinStore::new(dir.path().join(CHECKINS_FILE));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CHECKINS_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(CheckinStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_corrupt_file_survives_next_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = MoodStore::new(dir.path().join(MOODS_FILE));
        std::fs::write(store.path(), "[{\"mood\": \"Calm\", \"timestamp\": true}]").unwrap();

        let mut log = store.load();
        assert!(log.is_empty());
        assert_eq!(store.corrupt_path(), dir.path().join("moods.json.corrupt"));

        log.append("Proud", chrono::Utc::now());
        store.save(&log).unwrap();

        let kept = std::fs::read_to_string(store.corrupt_path()).unwrap();
        assert!(kept.contains("\"timestamp\": true"));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_reads_epoch_float_mood_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = MoodStore::new(dir.path().join(MOODS_FILE));
        std::fs::write(
            store.path(),
            r#"[{"mood": "Calm", "timestamp": 1715337600.5},
                {"mood": "Proud", "timestamp": 1715341200}]"#,
        )
        .unwrap();

        let mut log = store.load();
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].timestamp.timestamp(), 1_715_337_600);
        assert_eq!(log.entries()[0].timestamp.timestamp_subsec_millis(), 500);

        log.append("Sad", chrono::Utc::now());
        store.save(&log).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.entries()[0].mood, "Calm");
        assert_eq!(reloaded.entries()[1].mood, "Proud");
        assert!(!store.corrupt_path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckinStore::new(dir.path().join(CHECKINS_FILE));
        let ledger = Ledger::new()
            .upsert_today("Calm", "Calm", day("2024-05-01"))
            .upsert_today("Proud", "Proud", day("2024-05-02"));

        store.save(&ledger).unwrap();
        assert_eq!(store.load(), ledger);
        assert!(!dir.path().join("checkins.json.tmp").exists());
    }

    #[test]
    fn test_reads_hand_written_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CHECKINS_FILE);
        std::fs::write(
            &path,
            r#"[{"date": "2024-05-01", "word": "Sad", "mode": "Sad", "level": 1}]"#,
        )
        .unwrap();

        let ledger = CheckinStore::new(&path).load();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.records()[0].date, day("2024-05-01"));
        assert_eq!(ledger.records()[0].level, 1);
    }

    #[test]
    fn test_reset_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = MoodStore::new(dir.path().join(MOODS_FILE));
        let mut log = MoodLog::new();
        log.append("Calm", chrono::Utc::now());
        store.save(&log).unwrap();

        store.reset().unwrap();
        assert!(store.load().is_empty());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckinStore::new(dir.path().join("missing").join(CHECKINS_FILE));
        assert!(store.save(&Ledger::new()).is_err());
    }
}
