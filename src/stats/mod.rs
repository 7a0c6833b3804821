//! Game statistics
//!
//! Finished games are appended to an injected [`StatsStore`]. The file-backed store keeps a
//! JSON array of records; the in-memory store backs tests and throwaway sessions.

use crate::config::Language;
use crate::core::MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tempfile::NamedTempFile;
use thiserror::Error;

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub attempts: usize,
    pub success: bool,
    /// 100 for a win, 0 for a loss
    pub success_rate: u8,
    pub timestamp_ms: u64,
    pub language: Language,
}

impl GameRecord {
    /// Record a game finished now
    #[must_use]
    pub fn new(attempts: usize, success: bool, language: Language) -> Self {
        Self {
            attempts,
            success,
            success_rate: if success { 100 } else { 0 },
            timestamp_ms: now_ms(),
            language,
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to read statistics from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("statistics file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write statistics to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode statistics: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Storage for finished games
pub trait StatsStore {
    /// All records, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Vec<GameRecord>, StatsError>;

    /// Append one record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    fn append(&mut self, record: GameRecord) -> Result<(), StatsError>;
}

/// Records held in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<GameRecord>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<Vec<GameRecord>, StatsError> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: GameRecord) -> Result<(), StatsError> {
        self.records.push(record);
        Ok(())
    }
}

/// Records kept as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JsonFileStore {
    /// Parse the file strictly; a missing or blank file is an empty history
    fn read_records(&self) -> Result<Vec<GameRecord>, StatsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StatsError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| StatsError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file contents through a temporary file in the same directory
    fn write_records(&self, records: &[GameRecord]) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(records)?;
        let write_error = |source| StatsError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
        file.write_all(json.as_bytes()).map_err(write_error)?;
        file.as_file().sync_all().map_err(write_error)?;
        file.persist(&self.path).map_err(|err| write_error(err.error))?;
        Ok(())
    }
}

impl StatsStore for JsonFileStore {
    /// A missing file is an empty history. An unreadable or corrupt file is logged and also
    /// treated as empty.
    fn load(&self) -> Result<Vec<GameRecord>, StatsError> {
        match self.read_records() {
            Ok(records) => Ok(records),
            Err(err) => {
                tracing::warn!(%err, "ignoring unusable statistics");
                Ok(Vec::new())
            }
        }
    }

    /// Refuses to write over a file it cannot read or parse
    fn append(&mut self, record: GameRecord) -> Result<(), StatsError> {
        let mut records = self.read_records()?;
        records.push(record);
        self.write_records(&records)?;

        tracing::info!(
            path = %self.path.display(),
            total = records.len(),
            "game record saved"
        );
        Ok(())
    }
}

/// Aggregate view over a record history
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSummary {
    pub played: usize,
    pub wins: usize,
    /// Wins by number of attempts, index 0 is a first-guess win
    pub distribution: [usize; MAX_ATTEMPTS],
    pub current_streak: usize,
    pub best_streak: usize,
}

impl StatsSummary {
    #[must_use]
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut summary = Self::default();
        let mut streak = 0;

        for record in records {
            summary.played += 1;
            if record.success {
                summary.wins += 1;
                if let Some(slot) = record
                    .attempts
                    .checked_sub(1)
                    .and_then(|i| summary.distribution.get_mut(i))
                {
                    *slot += 1;
                }
                streak += 1;
                summary.best_streak = summary.best_streak.max(streak);
            } else {
                streak = 0;
            }
        }

        summary.current_streak = streak;
        summary
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.wins as f64 / self.played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(attempts: usize, success: bool) -> GameRecord {
        GameRecord::new(attempts, success, Language::En)
    }

    #[test]
    fn record_success_rate() {
        assert_eq!(record(3, true).success_rate, 100);
        assert_eq!(record(6, false).success_rate, 0);
        assert!(record(3, true).timestamp_ms > 0);
    }

    #[test]
    fn record_serializes_camel_case() {
        let mut r = record(4, true);
        r.timestamp_ms = 1_700_000_000_000;
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"attempts":4,"success":true,"successRate":100,"timestampMs":1700000000000,"language":"en"}"#
        );
    }

    #[test]
    fn memory_store_appends() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        store.append(record(2, true)).unwrap();
        store.append(record(6, false)).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].success);
        assert!(!records[1].success);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("stats.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        let mut store = JsonFileStore::new(&path);
        store.append(record(3, true)).unwrap();
        store.append(record(5, true)).unwrap();

        let reopened = JsonFileStore::new(&path);
        let records = reopened.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].attempts, 5);
    }

    #[test]
    fn file_store_corrupt_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(store.load().unwrap().is_empty());

        // The unparsable content is left untouched
        let err = store.append(record(1, true)).unwrap_err();
        assert!(matches!(err, StatsError::Corrupt { .. }), "{err}");
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn file_store_unreadable_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the file cannot be read as text
        let path = dir.path().join("stats.json");
        fs::create_dir(&path).unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(store.load().unwrap().is_empty());
        let err = store.append(record(1, true)).unwrap_err();
        assert!(matches!(err, StatsError::Read { .. }), "{err}");
        assert!(path.is_dir());
    }

    #[test]
    fn file_store_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let mut store = JsonFileStore::new(&path);
        store.append(record(2, true)).unwrap();
        store.append(record(6, false)).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("stats.json")]);

        let text = fs::read_to_string(&path).unwrap();
        let records: Vec<GameRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn file_store_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("missing").join("stats.json"));
        let err = store.append(record(1, true)).unwrap_err();
        assert!(matches!(err, StatsError::Write { .. }));
    }

    #[test]
    fn summary_of_empty_history() {
        let summary = StatsSummary::from_records(&[]);
        assert_eq!(summary, StatsSummary::default());
        assert!(summary.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn summary_counts_distribution_and_streaks() {
        let records = vec![
            record(3, true),
            record(4, true),
            record(6, false),
            record(2, true),
            record(3, true),
            record(1, true),
        ];
        let summary = StatsSummary::from_records(&records);

        assert_eq!(summary.played, 6);
        assert_eq!(summary.wins, 5);
        assert_eq!(summary.distribution, [1, 1, 2, 1, 0, 0]);
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.best_streak, 3);
        assert!((summary.win_rate() - 500.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn summary_loss_resets_current_streak() {
        let records = vec![record(2, true), record(2, true), record(6, false)];
        let summary = StatsSummary::from_records(&records);
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.best_streak, 2);
    }
}
