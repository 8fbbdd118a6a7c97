//! Workout plans: ordered collections of workouts.

use crate::{Person, Workout};
use serde::{Deserialize, Serialize};

/// An ordered collection of workouts owned by the plan
///
/// Order matters for display only; totals do not depend on it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    workouts: Vec<Workout>,
}

/// Calorie estimate for one workout of a plan
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownRow<'a> {
    pub position: usize,
    pub workout: &'a Workout,
    pub calories: f64,
}

impl WorkoutPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, workout: impl Into<Workout>) {
        self.workouts.push(workout.into());
    }

    /// Builder-style variant of [`WorkoutPlan::add`]
    pub fn with(mut self, workout: impl Into<Workout>) -> Self {
        self.add(workout);
        self
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Workout> {
        self.workouts.iter()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Sum of per-workout calorie estimates for `person`
    pub fn total_calories(&self, person: &Person) -> f64 {
        self.workouts
            .iter()
            .map(|w| w.estimate_calories(person))
            .sum()
    }

    /// Per-workout estimates in plan order
    pub fn breakdown(&self, person: &Person) -> Vec<BreakdownRow<'_>> {
        self.workouts
            .iter()
            .enumerate()
            .map(|(i, workout)| BreakdownRow {
                position: i + 1,
                workout,
                calories: workout.estimate_calories(person),
            })
            .collect()
    }

    /// New plan with copies of this plan's workouts followed by `other`'s
    ///
    /// Unrecognized workouts are dropped from the result.
    pub fn merge(&self, other: &WorkoutPlan) -> WorkoutPlan {
        let merged: WorkoutPlan = self
            .workouts
            .iter()
            .chain(other.workouts.iter())
            .filter_map(|w| match w {
                Workout::Cardio(c) => Some(Workout::Cardio(c.clone())),
                Workout::Strength(s) => Some(Workout::Strength(s.clone())),
                Workout::Flexibility(f) => Some(Workout::Flexibility(f.clone())),
                Workout::Unrecognized => None,
            })
            .collect();

        let dropped = self.len() + other.len() - merged.len();
        if dropped > 0 {
            tracing::debug!("Dropped {} unrecognized workouts while merging", dropped);
        }
        tracing::debug!(
            "Merged plans of {} and {} workouts into {}",
            self.len(),
            other.len(),
            merged.len()
        );
        merged
    }

    /// Display lines: a count header then one description per workout
    pub fn display(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.workouts.len() + 1);
        lines.push(format!("{} items", self.workouts.len()));
        lines.extend(self.workouts.iter().map(Workout::describe));
        lines
    }
}

impl FromIterator<Workout> for WorkoutPlan {
    fn from_iter<I: IntoIterator<Item = Workout>>(iter: I) -> Self {
        Self {
            workouts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WorkoutPlan {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.workouts.iter()
    }
}

impl std::ops::Add for &WorkoutPlan {
    type Output = WorkoutPlan;

    fn add(self, other: Self) -> WorkoutPlan {
        self.merge(other)
    }
}

impl std::ops::Add for WorkoutPlan {
    type Output = WorkoutPlan;

    fn add(self, other: Self) -> WorkoutPlan {
        self.merge(&other)
    }
}
