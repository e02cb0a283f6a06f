//! Habit record types.
//!
//! A habit is scheduled for exactly one calendar date and carries a
//! completion flag. Identity and date are fixed at creation; only the
//! completion flag changes afterwards.

use serde::{Deserialize, Serialize};

/// A user-defined recurring task scheduled for one specific calendar date.
///
/// Every field carries `#[serde(default)]` so the persisted payload stays
/// permissive: any JSON object in the collection array deserializes, with
/// missing fields falling back to their zero values. A payload that is not
/// an array of objects fails the load outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique within the collection; a millisecond timestamp in practice.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Zero-padded 24-hour `HH:MM`, so lexical order is chronological order.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub completed: bool,
    /// Owning calendar date as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

/// Caller-supplied shape for creating a habit.
///
/// The id and completion flag are assigned by the store. No field is
/// validated; whatever the caller supplies is stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHabit {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habit_deserializes_with_missing_fields() {
        let habit: Habit = serde_json::from_str(r#"{"name": "Stretch"}"#).unwrap();
        assert_eq!(habit.name, "Stretch");
        assert_eq!(habit.id, 0);
        assert!(!habit.completed);
        assert_eq!(habit.date, "");
    }

    #[test]
    fn test_habit_deserializes_with_extra_fields() {
        let habit: Habit = serde_json::from_str(
            r##"{"id": 7, "name": "Run", "color": "#ff0000", "priority": 3}"##,
        )
        .unwrap();
        assert_eq!(habit.id, 7);
        assert_eq!(habit.name, "Run");
    }

    #[test]
    fn test_collection_must_be_an_array() {
        let result = serde_json::from_str::<Vec<Habit>>(r#"{"oops": true}"#);
        assert!(result.is_err());
    }
}
