//! Day-window view commands for CLI.

use clap::Subcommand;
use habitdeck_core::{Config, Dashboard, HabitFile};
use serde::Serialize;

use super::render_json;

#[derive(Subcommand)]
pub enum DashboardAction {
    /// The 5-day window with per-day completion ratios
    Window,
    /// Per-day completion percentages across the window
    Progress,
    /// Consecutive fully-completed days ending today
    Streak,
    /// Today's habits and progress
    Today,
    /// One window day by date (YYYY-MM-DD)
    Day {
        /// Calendar date
        date: String,
    },
}

#[derive(Serialize)]
struct WindowView {
    user: String,
    days: Vec<habitdeck_core::DayBucket>,
    progress: Vec<u32>,
    streak: u32,
}

#[derive(Serialize)]
struct TodayView {
    habits: Vec<habitdeck_core::Habit>,
    progress: habitdeck_core::DayProgress,
}

pub fn run(action: DashboardAction) -> Result<(), Box<dyn std::error::Error>> {
    let board = Dashboard::load(HabitFile::open_default()?)?;

    match action {
        DashboardAction::Window => {
            let config = Config::load()?;
            let view = WindowView {
                user: config.profile.name,
                days: board.day_window(),
                progress: board.overview_progress(),
                streak: board.streak(),
            };
            println!("{}", render_json(&view)?);
        }
        DashboardAction::Progress => {
            println!("{}", render_json(&board.overview_progress())?);
        }
        DashboardAction::Streak => {
            println!("{}", board.streak());
        }
        DashboardAction::Today => {
            let view = TodayView {
                habits: board.today_habits(),
                progress: board.today_progress(),
            };
            println!("{}", render_json(&view)?);
        }
        DashboardAction::Day { date } => match board.day_by_date(&date) {
            Some(day) => println!("{}", render_json(&day)?),
            None => println!("Date outside the 5-day window: {date}"),
        },
    }
    Ok(())
}
