//! Habit state store.
//!
//! [`Dashboard`] owns the in-memory habit collection, mirrors it to a
//! [`HabitFile`] on every mutation, and exposes the derived day-window
//! views. One instance per session; construction performs the load
//! (seeding demo data on first run), after which all operations are
//! synchronous and run to completion on the calling thread.

mod window;

pub use window::{DayBucket, DayProgress};

use chrono::{Duration, Local, NaiveDate, Utc};

use crate::error::StorageError;
use crate::habit::{Habit, NewHabit};
use crate::storage::HabitFile;

/// In-memory habit collection plus its persistence mirror.
pub struct Dashboard {
    habits: Vec<Habit>,
    today: NaiveDate,
    file: HabitFile,
}

impl Dashboard {
    /// Load the persisted collection, seeding demo data if it is absent
    /// or empty. The current day is resolved from the local clock.
    ///
    /// # Errors
    /// Returns an error if the persisted payload is malformed or cannot
    /// be read, or if seeding cannot be persisted.
    pub fn load(file: HabitFile) -> Result<Self, StorageError> {
        Self::load_with_today(file, Local::now().date_naive())
    }

    /// Load with an explicit current day (used by tests).
    ///
    /// # Errors
    /// Same conditions as [`Dashboard::load`].
    pub fn load_with_today(file: HabitFile, today: NaiveDate) -> Result<Self, StorageError> {
        let mut habits = file.load()?;
        if habits.is_empty() {
            habits = seed_habits(today);
            file.save(&habits)?;
        }
        Ok(Self {
            habits,
            today,
            file,
        })
    }

    /// The full habit collection, in insertion order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// The resolved current day.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Append a new habit with a fresh id and `completed = false`, then
    /// persist. Caller-supplied fields are stored as-is, unvalidated.
    ///
    /// Returns the assigned id.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn add(&mut self, new: NewHabit) -> Result<i64, StorageError> {
        let id = self.allocate_id();
        self.habits.push(Habit {
            id,
            name: new.name,
            description: new.description,
            time: new.time,
            completed: false,
            date: new.date,
        });
        self.file.save(&self.habits)?;
        Ok(id)
    }

    /// Flip a habit's completion flag and persist.
    ///
    /// Unknown ids are a silent no-op. Habits dated strictly after the
    /// current day are left untouched, with a diagnostic on stderr only;
    /// an unparseable date is treated as non-future and toggles normally.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn toggle(&mut self, id: i64) -> Result<(), StorageError> {
        let today = self.today;
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return Ok(());
        };

        if let Ok(date) = NaiveDate::parse_from_str(&habit.date, "%Y-%m-%d") {
            if date > today {
                eprintln!("warning: cannot modify future habits ({})", habit.date);
                return Ok(());
            }
        }

        habit.completed = !habit.completed;
        self.file.save(&self.habits)
    }

    /// Remove every habit matching `id` and persist. Deleting an absent
    /// id is a no-op.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn delete(&mut self, id: i64) -> Result<(), StorageError> {
        self.habits.retain(|h| h.id != id);
        self.file.save(&self.habits)
    }

    /// The 5-day window: one [`DayBucket`] per offset in −2..=+2.
    pub fn day_window(&self) -> Vec<DayBucket> {
        window::day_window(&self.habits, self.today)
    }

    /// Per-day completion percentages across the window.
    pub fn overview_progress(&self) -> Vec<u32> {
        window::overview_progress(&self.habits, self.today)
    }

    /// Consecutive fully-completed days ending today.
    pub fn streak(&self) -> u32 {
        window::streak(&self.habits, self.today)
    }

    /// Habits scheduled for the current day.
    pub fn today_habits(&self) -> Vec<Habit> {
        window::today_habits(&self.habits, self.today)
    }

    /// Completed/total counts for the current day.
    pub fn today_progress(&self) -> DayProgress {
        window::today_progress(&self.habits, self.today)
    }

    /// Window bucket for a formatted date, `None` outside the window.
    pub fn day_by_date(&self, date_string: &str) -> Option<DayBucket> {
        window::day_by_date(&self.habits, self.today, date_string)
    }

    /// Millisecond timestamp bumped past any existing id, so ids stay
    /// unique even when habits are created within the same millisecond.
    fn allocate_id(&self) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        while self.habits.iter().any(|h| h.id == id) {
            id += 1;
        }
        id
    }
}

/// Demo data for first runs: two named habits per day across the window,
/// with all days before the current day marked completed.
fn seed_habits(today: NaiveDate) -> Vec<Habit> {
    let base = Utc::now().timestamp_millis();
    let mut habits = Vec::new();
    for offset in -2i64..=2 {
        let date = (today + Duration::days(offset)).format("%Y-%m-%d").to_string();
        let completed = offset < 0;
        habits.push(Habit {
            id: base + habits.len() as i64,
            name: "Morning Workout".into(),
            description: "Full body routine".into(),
            time: "08:00".into(),
            completed,
            date: date.clone(),
        });
        habits.push(Habit {
            id: base + habits.len() as i64,
            name: "Deep Work Block".into(),
            description: "One uninterrupted focus session".into(),
            time: "10:00".into(),
            completed,
            date,
        });
    }
    habits
}
