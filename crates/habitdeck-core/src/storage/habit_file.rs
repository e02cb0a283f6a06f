//! JSON-file persistence for the habit collection.
//!
//! The full collection is the sole unit of persistence: every mutation
//! rewrites the entire array. A missing file reads as an empty collection;
//! a payload that does not parse as a JSON array is a fatal load error
//! with no recovery path.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::habit::Habit;

use super::data_dir;

const HABITS_FILE: &str = "habits.json";

/// Handle to the on-disk habit collection.
#[derive(Debug, Clone)]
pub struct HabitFile {
    path: PathBuf,
}

impl HabitFile {
    /// The default collection at `~/.config/habitdeck/habits.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join(HABITS_FILE),
        })
    }

    /// A collection at an explicit path (used by tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection. A missing file is an empty collection.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or does not
    /// parse as a JSON array.
    pub fn load(&self) -> Result<Vec<Habit>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&content).map_err(|e| StorageError::ParseFailed {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Serialize the whole collection back to disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let content = serde_json::to_string(habits).map_err(|e| StorageError::ParseFailed {
            path: self.path.clone(),
            source: e,
        })?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_habit(id: i64) -> Habit {
        Habit {
            id,
            name: "Morning Workout".into(),
            description: "Full body routine".into(),
            time: "08:00".into(),
            completed: false,
            date: "2026-08-25".into(),
        }
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = HabitFile::at(dir.path().join("habits.json"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let file = HabitFile::at(dir.path().join("habits.json"));
        let habits = vec![sample_habit(1), sample_habit(2)];

        file.save(&habits).unwrap();
        let loaded = file.load().unwrap();
        assert_eq!(loaded, habits);
    }

    #[test]
    fn test_malformed_payload_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        std::fs::write(&path, "{\"not\": \"an array\"}").unwrap();

        let err = HabitFile::at(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::ParseFailed { .. }));
    }

    #[test]
    fn test_unknown_object_shapes_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        std::fs::write(&path, r#"[{"legacy_field": 1}, {"id": 9, "name": "Run"}]"#).unwrap();

        let loaded = HabitFile::at(&path).load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].name, "Run");
    }
}
