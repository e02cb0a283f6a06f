//! Derived day-window views.
//!
//! Pure functions over a snapshot of the habit collection and a resolved
//! current day. Nothing here caches or tracks dependencies; callers
//! recompute on demand after mutating the collection.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::habit::Habit;

/// Window offsets relative to the current day, inclusive.
const WINDOW_START: i64 = -2;
const WINDOW_END: i64 = 2;

/// One calendar day of the window: the habits scheduled for it plus
/// display metadata.
#[derive(Debug, Clone, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Short uppercase weekday label, e.g. "MON".
    pub day_label: String,
    /// Habits whose date matches, sorted by time-of-day ascending.
    pub habits: Vec<Habit>,
    /// True when the date is strictly after the current day.
    pub is_future: bool,
}

/// Completed/total counts for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayProgress {
    pub completed: usize,
    pub total: usize,
}

/// Build the 5-day window: one bucket per offset in −2..=+2, ascending.
///
/// Habits are matched by exact date-string comparison and sorted within
/// each bucket by lexical time comparison, which is chronological for
/// zero-padded `HH:MM`.
pub fn day_window(habits: &[Habit], today: NaiveDate) -> Vec<DayBucket> {
    (WINDOW_START..=WINDOW_END)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let date_string = date.format("%Y-%m-%d").to_string();
            let mut bucket: Vec<Habit> = habits
                .iter()
                .filter(|h| h.date == date_string)
                .cloned()
                .collect();
            bucket.sort_by(|a, b| a.time.cmp(&b.time));
            DayBucket {
                date,
                day_label: date.format("%a").to_string().to_uppercase(),
                habits: bucket,
                is_future: date > today,
            }
        })
        .collect()
}

/// Completion percentage for one bucket: 0 when empty, else
/// `round(100 * completed / total)`.
pub fn completion_ratio(bucket: &DayBucket) -> u32 {
    if bucket.habits.is_empty() {
        return 0;
    }
    let completed = bucket.habits.iter().filter(|h| h.completed).count();
    ((completed as f64 / bucket.habits.len() as f64) * 100.0).round() as u32
}

/// Per-day completion ratios across the window, in window order.
pub fn overview_progress(habits: &[Habit], today: NaiveDate) -> Vec<u32> {
    day_window(habits, today)
        .iter()
        .map(completion_ratio)
        .collect()
}

/// Consecutive fully-completed days ending at the current day.
///
/// Walks backward from today's bucket through the window; an empty day or
/// a day with any incomplete habit stops the count.
pub fn streak(habits: &[Habit], today: NaiveDate) -> u32 {
    let window = day_window(habits, today);
    let Some(today_index) = window.iter().position(|d| d.date == today) else {
        return 0;
    };

    let mut count = 0;
    for day in window[..=today_index].iter().rev() {
        if !day.habits.is_empty() && day.habits.iter().all(|h| h.completed) {
            count += 1;
        } else {
            break;
        }
    }
    count
}

/// Habits scheduled for the current day, unsorted.
pub fn today_habits(habits: &[Habit], today: NaiveDate) -> Vec<Habit> {
    let today_string = today.format("%Y-%m-%d").to_string();
    habits
        .iter()
        .filter(|h| h.date == today_string)
        .cloned()
        .collect()
}

/// Completed/total counts for the current day; both zero when empty.
pub fn today_progress(habits: &[Habit], today: NaiveDate) -> DayProgress {
    let todays = today_habits(habits, today);
    DayProgress {
        completed: todays.iter().filter(|h| h.completed).count(),
        total: todays.len(),
    }
}

/// Find the window bucket whose formatted date equals `date_string`.
///
/// Returns `None` for dates outside the 5-day window; absence is not an
/// error.
pub fn day_by_date(habits: &[Habit], today: NaiveDate, date_string: &str) -> Option<DayBucket> {
    day_window(habits, today)
        .into_iter()
        .find(|day| day.date.format("%Y-%m-%d").to_string() == date_string)
}
