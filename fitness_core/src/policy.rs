//! Goal-based workout recommendations.
//!
//! A user's free-text goal is classified by case-insensitive substring
//! match: "lose" first, then "build", everything else is "maintain".
//! Each intent maps to a fixed plan template.

use crate::{User, Workout, WorkoutPlan};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Intent derived from a free-text goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalIntent {
    LoseWeight,
    BuildMuscle,
    Maintain,
}

impl GoalIntent {
    pub fn classify(goal: &str) -> Self {
        let goal = goal.to_lowercase();
        if goal.contains("lose") {
            GoalIntent::LoseWeight
        } else if goal.contains("build") {
            GoalIntent::BuildMuscle
        } else {
            GoalIntent::Maintain
        }
    }
}

/// Plan templates, built once and cloned per recommendation
struct PolicyTable {
    lose_weight: WorkoutPlan,
    build_muscle: WorkoutPlan,
    maintain: WorkoutPlan,
    sample: WorkoutPlan,
}

static POLICY_TABLE: Lazy<PolicyTable> = Lazy::new(build_policy_table);

fn build_policy_table() -> PolicyTable {
    PolicyTable {
        lose_weight: WorkoutPlan::new()
            .with(Workout::cardio("HIIT", 25, 9, 10.0))
            .with(Workout::strength("Full-body strength", 30, 7))
            .with(Workout::flexibility("Stretch", 15, 2)),
        build_muscle: WorkoutPlan::new()
            .with(Workout::strength("Hypertrophy", 50, 8))
            .with(Workout::cardio("Light cardio", 20, 4, 5.5))
            .with(Workout::flexibility("Mobility", 20, 3)),
        maintain: WorkoutPlan::new()
            .with(Workout::cardio("Steady-state", 30, 5, 6.0))
            .with(Workout::strength("Maintenance strength", 30, 5)),
        sample: WorkoutPlan::new()
            .with(Workout::cardio("Jogging", 30, 6, 7.0))
            .with(Workout::strength("Circuit training", 40, 7))
            .with(Workout::flexibility("Yoga", 20, 3)),
    }
}

/// Plan template for an intent
pub fn plan_for(intent: GoalIntent) -> WorkoutPlan {
    let table = &*POLICY_TABLE;
    match intent {
        GoalIntent::LoseWeight => table.lose_weight.clone(),
        GoalIntent::BuildMuscle => table.build_muscle.clone(),
        GoalIntent::Maintain => table.maintain.clone(),
    }
}

/// Recommend a plan for the user's goal
pub fn recommend(user: &User) -> WorkoutPlan {
    let intent = user.intent();
    tracing::info!("Recommending {:?} plan for goal {:?}", intent, user.goal());
    plan_for(intent)
}

/// General-purpose sample plan: jogging, circuit training and yoga
pub fn sample_plan() -> WorkoutPlan {
    POLICY_TABLE.sample.clone()
}
