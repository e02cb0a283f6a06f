//! # Habitdeck Core Library
//!
//! This library provides the core business logic for Habitdeck, a personal
//! habit tracker. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary, with any GUI front end being
//! a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Dashboard**: An in-memory habit collection with derived day-window
//!   views (5-day window, per-day completion ratios, streak), mirrored to
//!   a JSON file on every mutation
//! - **Storage**: JSON-file habit persistence, SQLite-based untyped document
//!   store, and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Dashboard`]: Habit state store and derived views
//! - [`HabitFile`]: Whole-collection JSON persistence
//! - [`DocumentDb`]: Schemaless JSON document CRUD
//! - [`Config`]: Application configuration management

pub mod dashboard;
pub mod error;
pub mod habit;
pub mod storage;

pub use dashboard::{Dashboard, DayBucket, DayProgress};
pub use error::{ConfigError, CoreError, DocumentError, StorageError};
pub use habit::{Habit, NewHabit};
pub use storage::{Config, Document, DocumentDb, HabitFile};
