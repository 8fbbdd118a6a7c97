#![forbid(unsafe_code)]

//! Core domain model for the fitplan workout planner.
//!
//! This crate provides:
//! - People and users with BMI computation
//! - Workout kinds with MET-based calorie estimation
//! - Workout plans (totals, merging, display)
//! - Goal-based plan recommendations
//! - Session log and CSV export

pub mod error;
pub mod person;
pub mod workout;
pub mod plan;
pub mod policy;
pub mod config;
pub mod logging;
pub mod session_log;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use person::{Gender, Person, User};
pub use workout::{Cardio, Flexibility, Strength, Workout, WorkoutKind};
pub use plan::{BreakdownRow, WorkoutPlan};
pub use policy::{recommend, sample_plan, GoalIntent};
pub use config::Config;
pub use session_log::{read_entries, LogEntry, SessionSink, TextLogSink};
pub use export::write_plan_csv;
