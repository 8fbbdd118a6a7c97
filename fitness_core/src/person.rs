//! People and their body measurements.
//!
//! A [`Person`] carries the biometric attributes that calorie estimation
//! needs. A [`User`] is a person with a free-text fitness goal.

use crate::policy::GoalIntent;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender of a person
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        f.write_str(label)
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            "o" | "other" => Ok(Gender::Other),
            other => Err(Error::Parse(format!("unknown gender: {}", other))),
        }
    }
}

/// A person with biometric attributes
///
/// Attributes are mutable through setters and are not validated; only
/// [`Person::bmi`] checks the height it divides by.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    name: String,
    age: i32,
    weight_kg: f64,
    height_cm: f64,
    gender: Gender,
}

impl Default for Person {
    fn default() -> Self {
        Self::new("Unknown", 18, 70.0, 170.0, Gender::Male)
    }
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        weight_kg: f64,
        height_cm: f64,
        gender: Gender,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            weight_kg,
            height_cm,
            gender,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    /// Body weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight_kg
    }

    pub fn set_weight(&mut self, weight_kg: f64) {
        self.weight_kg = weight_kg;
    }

    /// Height in centimeters
    pub fn height(&self) -> f64 {
        self.height_cm
    }

    pub fn set_height(&mut self, height_cm: f64) {
        self.height_cm = height_cm;
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Body mass index: weight (kg) divided by the square of height (m)
    ///
    /// Fails with [`Error::InvalidMeasurement`] when height is not positive.
    pub fn bmi(&self) -> Result<f64> {
        let height_m = self.height_cm / 100.0;
        // `!(x > 0)` also rejects NaN
        if !(height_m > 0.0) {
            return Err(Error::InvalidMeasurement(format!(
                "Invalid height for BMI calculation: {} cm",
                self.height_cm
            )));
        }
        Ok(self.weight_kg / (height_m * height_m))
    }
}

/// A person pursuing a fitness goal
///
/// The goal is free text; any value is accepted and classified on demand.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    person: Person,
    goal: String,
}

impl Default for User {
    fn default() -> Self {
        Self::new(Person::default(), "Maintain")
    }
}

impl User {
    pub fn new(person: Person, goal: impl Into<String>) -> Self {
        Self {
            person,
            goal: goal.into(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = goal.into();
    }

    /// Classify the free-text goal into an intent
    pub fn intent(&self) -> GoalIntent {
        GoalIntent::classify(&self.goal)
    }

    pub fn bmi(&self) -> Result<f64> {
        self.person.bmi()
    }
}

impl AsRef<Person> for User {
    fn as_ref(&self) -> &Person {
        &self.person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_matches_formula() {
        let cases = [(72.5, 175.0), (70.0, 170.0), (55.2, 160.5), (120.0, 201.0)];
        for (weight, height) in cases {
            let person = Person::new("Test", 30, weight, height, Gender::Other);
            let expected = weight / ((height / 100.0) * (height / 100.0));
            let bmi = person.bmi().unwrap();
            assert!((bmi - expected).abs() < 1e-9, "bmi {} != {}", bmi, expected);
        }
    }

    #[test]
    fn test_bmi_zero_height_is_invalid() {
        let person = Person::new("ZeroHeight", 30, 70.0, 0.0, Gender::Female);
        match person.bmi() {
            Err(Error::InvalidMeasurement(msg)) => assert!(msg.contains("height")),
            other => panic!("Expected InvalidMeasurement, got {:?}", other),
        }
    }

    #[test]
    fn test_bmi_negative_height_is_invalid() {
        let person = Person::new("Negative", 30, 70.0, -150.0, Gender::Male);
        assert!(matches!(person.bmi(), Err(Error::InvalidMeasurement(_))));
    }

    #[test]
    fn test_setters_do_not_validate() {
        let mut person = Person::default();
        person.set_weight(-5.0);
        person.set_age(-3);
        person.set_name("");
        assert_eq!(person.weight(), -5.0);
        assert_eq!(person.age(), -3);
        assert_eq!(person.name(), "");
        // Still computable because height is positive
        assert!(person.bmi().unwrap() < 0.0);
    }

    #[test]
    fn test_default_person_and_user() {
        let user = User::default();
        assert_eq!(user.name(), "Unknown");
        assert_eq!(user.person().age(), 18);
        assert_eq!(user.person().weight(), 70.0);
        assert_eq!(user.person().height(), 170.0);
        assert_eq!(user.person().gender(), Gender::Male);
        assert_eq!(user.goal(), "Maintain");
    }

    #[test]
    fn test_person_copy_is_independent() {
        let original = Person::new("Devin M.", 22, 72.5, 175.0, Gender::Male);
        let mut copy = original.clone();
        copy.set_weight(80.0);
        assert_eq!(original.weight(), 72.5);
        assert_eq!(copy.weight(), 80.0);
    }

    #[test]
    fn test_user_goal_accepts_any_text() {
        let mut user = User::default();
        user.set_goal("");
        assert_eq!(user.goal(), "");
        user.set_goal("run a marathon someday");
        assert_eq!(user.intent(), GoalIntent::Maintain);
        user.set_goal("Build muscle");
        assert_eq!(user.intent(), GoalIntent::BuildMuscle);
    }

    #[test]
    fn test_parse_gender() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" Other ".parse::<Gender>().unwrap(), Gender::Other);
        assert!(matches!("x".parse::<Gender>(), Err(Error::Parse(_))));
    }
}
