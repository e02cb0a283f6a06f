//! Habit management commands for CLI.

use chrono::Local;
use clap::Subcommand;
use habitdeck_core::{Dashboard, HabitFile, NewHabit};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
        /// Time of day, zero-padded 24-hour HH:MM
        #[arg(long, default_value = "08:00")]
        time: String,
        /// Calendar date YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Flip a habit's completion flag
    Toggle {
        /// Habit id
        id: i64,
    },
    /// Delete a habit
    Delete {
        /// Habit id
        id: i64,
    },
    /// List the full habit collection
    List {
        /// Only habits on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Dashboard::load(HabitFile::open_default()?)?;

    match action {
        HabitAction::Add {
            name,
            description,
            time,
            date,
        } => {
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
            let id = board.add(NewHabit {
                name,
                description,
                time,
                date,
            })?;
            println!("Habit created: {id}");
            let habit = board.habits().iter().find(|h| h.id == id);
            println!("{}", super::render_json(&habit)?);
        }
        HabitAction::Toggle { id } => {
            board.toggle(id)?;
            match board.habits().iter().find(|h| h.id == id) {
                Some(habit) => println!("{}", super::render_json(habit)?),
                None => println!("Habit not found: {id}"),
            }
        }
        HabitAction::Delete { id } => {
            board.delete(id)?;
            println!("ok");
        }
        HabitAction::List { date } => {
            let filtered: Vec<_> = board
                .habits()
                .iter()
                .filter(|h| date.as_deref().map_or(true, |d| h.date == d))
                .collect();
            println!("{}", super::render_json(&filtered)?);
        }
    }
    Ok(())
}
