//! Workout types and calorie estimation.
//!
//! Calories are estimated with a MET model: `adjusted_met * weight_kg * hours`.
//! Each workout kind adjusts its base MET by intensity differently:
//! - Cardio: caller-supplied MET, ±5% per intensity point away from 5
//! - Strength: MET 6.0, ±4% per intensity point away from 5
//! - Flexibility: MET 3.0, intensity has no effect
//!
//! Intensity is nominally 1–10 but is neither validated nor clamped.

use crate::Person;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base MET for strength training
pub const STRENGTH_MET: f64 = 6.0;

/// Base MET for flexibility work
pub const FLEXIBILITY_MET: f64 = 3.0;

/// Intensity at which no MET adjustment is applied
const NEUTRAL_INTENSITY: f64 = 5.0;

fn hours(duration_minutes: u32) -> f64 {
    f64::from(duration_minutes) / 60.0
}

fn intensity_factor(intensity: i32, step: f64) -> f64 {
    1.0 + (f64::from(intensity) - NEUTRAL_INTENSITY) * step
}

/// Cardio workout with an activity-specific MET value
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Cardio {
    pub name: String,
    pub duration_minutes: u32,
    pub intensity: i32,
    pub met: f64,
}

impl Cardio {
    pub fn new(name: impl Into<String>, duration_minutes: u32, intensity: i32, met: f64) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            intensity,
            met,
        }
    }

    pub fn estimate_calories(&self, person: &Person) -> f64 {
        let adjusted_met = self.met * intensity_factor(self.intensity, 0.05);
        adjusted_met * person.weight() * hours(self.duration_minutes)
    }

    /// Base estimate scaled by an extra multiplier (not validated)
    pub fn estimate_calories_scaled(&self, person: &Person, multiplier: f64) -> f64 {
        self.estimate_calories(person) * multiplier
    }
}

/// Strength workout at a fixed base MET
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Strength {
    pub name: String,
    pub duration_minutes: u32,
    pub intensity: i32,
}

impl Strength {
    pub fn new(name: impl Into<String>, duration_minutes: u32, intensity: i32) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            intensity,
        }
    }

    pub fn estimate_calories(&self, person: &Person) -> f64 {
        let adjusted_met = STRENGTH_MET * intensity_factor(self.intensity, 0.04);
        adjusted_met * person.weight() * hours(self.duration_minutes)
    }
}

/// Flexibility workout at a fixed base MET
///
/// Intensity is stored and displayed but does not affect the estimate.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Flexibility {
    pub name: String,
    pub duration_minutes: u32,
    pub intensity: i32,
}

impl Flexibility {
    pub fn new(name: impl Into<String>, duration_minutes: u32, intensity: i32) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            intensity,
        }
    }

    pub fn estimate_calories(&self, person: &Person) -> f64 {
        FLEXIBILITY_MET * person.weight() * hours(self.duration_minutes)
    }
}

/// Kind label for a workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Cardio,
    Strength,
    Flexibility,
    Unrecognized,
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkoutKind::Cardio => "Cardio",
            WorkoutKind::Strength => "Strength",
            WorkoutKind::Flexibility => "Flexibility",
            WorkoutKind::Unrecognized => "Unrecognized",
        };
        f.write_str(label)
    }
}

/// A workout of one of the known kinds
///
/// Serialized with an internal `kind` tag. A tag this build does not know
/// deserializes to [`Workout::Unrecognized`], which carries no data, burns
/// no calories and is dropped when plans are merged.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    Cardio(Cardio),
    Strength(Strength),
    Flexibility(Flexibility),
    #[serde(other)]
    Unrecognized,
}

impl Workout {
    pub fn cardio(name: impl Into<String>, duration_minutes: u32, intensity: i32, met: f64) -> Self {
        Workout::Cardio(Cardio::new(name, duration_minutes, intensity, met))
    }

    pub fn strength(name: impl Into<String>, duration_minutes: u32, intensity: i32) -> Self {
        Workout::Strength(Strength::new(name, duration_minutes, intensity))
    }

    pub fn flexibility(name: impl Into<String>, duration_minutes: u32, intensity: i32) -> Self {
        Workout::Flexibility(Flexibility::new(name, duration_minutes, intensity))
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Cardio(_) => WorkoutKind::Cardio,
            Workout::Strength(_) => WorkoutKind::Strength,
            Workout::Flexibility(_) => WorkoutKind::Flexibility,
            Workout::Unrecognized => WorkoutKind::Unrecognized,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Workout::Cardio(w) => &w.name,
            Workout::Strength(w) => &w.name,
            Workout::Flexibility(w) => &w.name,
            Workout::Unrecognized => "",
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        match self {
            Workout::Cardio(w) => w.duration_minutes,
            Workout::Strength(w) => w.duration_minutes,
            Workout::Flexibility(w) => w.duration_minutes,
            Workout::Unrecognized => 0,
        }
    }

    pub fn intensity(&self) -> i32 {
        match self {
            Workout::Cardio(w) => w.intensity,
            Workout::Strength(w) => w.intensity,
            Workout::Flexibility(w) => w.intensity,
            Workout::Unrecognized => 0,
        }
    }

    /// Estimated calories burned by `person` doing this workout
    pub fn estimate_calories(&self, person: &Person) -> f64 {
        match self {
            Workout::Cardio(w) => w.estimate_calories(person),
            Workout::Strength(w) => w.estimate_calories(person),
            Workout::Flexibility(w) => w.estimate_calories(person),
            Workout::Unrecognized => 0.0,
        }
    }

    /// One-line description, e.g. `Cardio - HIIT (25 min, intensity 9)`
    pub fn describe(&self) -> String {
        if let Workout::Unrecognized = self {
            return "Unrecognized workout".to_string();
        }
        format!(
            "{} - {} ({} min, intensity {})",
            self.kind(),
            self.name(),
            self.duration_minutes(),
            self.intensity()
        )
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Cardio> for Workout {
    fn from(w: Cardio) -> Self {
        Workout::Cardio(w)
    }
}

impl From<Strength> for Workout {
    fn from(w: Strength) -> Self {
        Workout::Strength(w)
    }
}

impl From<Flexibility> for Workout {
    fn from(w: Flexibility) -> Self {
        Workout::Flexibility(w)
    }
}
