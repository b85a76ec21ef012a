//! Health metrics calculations module
//!
//! Computes BMI, BMR (Mifflin-St Jeor) and goal-adjusted daily calories from
//! a validated set of personal inputs.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no I/O, no hidden state, identical inputs give identical outputs
//! 2. **Validate First**: every precondition is checked before any arithmetic runs
//! 3. **Closed Enumerations**: raw strings are parsed once at the boundary
//! 4. **SI Units Only**: weight in kilograms, height in centimeters

use crate::errors::ValidationError;
use crate::validation::{
    match_choice, validate_age, validate_height_cm, validate_weight_kg, VALID_ACTIVITY_LEVELS,
    VALID_GENDERS, VALID_GOALS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Input Types
// ============================================================================

/// Gender used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All genders, in the order of `VALID_GENDERS`
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Constant term of the Mifflin-St Jeor equation
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = match_choice("gender", s, VALID_GENDERS)?;
        Ok(Gender::ALL[index])
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    #[serde(rename = "very active")]
    VeryActive,
}

impl ActivityLevel {
    /// All levels, in the order of `VALID_ACTIVITY_LEVELS`
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = match_choice("activity_level", s, VALID_ACTIVITY_LEVELS)?;
        Ok(ActivityLevel::ALL[index])
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary goal applied on top of maintenance calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietGoal {
    #[serde(rename = "weight loss")]
    WeightLoss,
    #[serde(rename = "maintenance")]
    Maintenance,
    #[serde(rename = "weight gain")]
    WeightGain,
}

impl DietGoal {
    /// All goals, in the order of `VALID_GOALS`
    pub const ALL: [DietGoal; 3] = [DietGoal::WeightLoss, DietGoal::Maintenance, DietGoal::WeightGain];

    /// Daily calorie offset in kcal
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            DietGoal::WeightLoss => -500.0,
            DietGoal::Maintenance => 0.0,
            DietGoal::WeightGain => 500.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietGoal::WeightLoss => "weight loss",
            DietGoal::Maintenance => "maintenance",
            DietGoal::WeightGain => "weight gain",
        }
    }
}

impl FromStr for DietGoal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = match_choice("goal", s, VALID_GOALS)?;
        Ok(DietGoal::ALL[index])
    }
}

impl fmt::Display for DietGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated inputs for a single calculation
///
/// Fields are private so an instance always satisfies the magnitude checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthInputs {
    weight_kg: f64,
    height_cm: f64,
    age: i32,
    gender: Gender,
    activity_level: ActivityLevel,
    goal: DietGoal,
}

impl HealthInputs {
    /// Build inputs from already-typed enumerations
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age: i32,
        gender: Gender,
        activity_level: ActivityLevel,
        goal: DietGoal,
    ) -> Result<Self, ValidationError> {
        validate_weight_kg(weight_kg)?;
        validate_height_cm(height_cm)?;
        validate_age(age)?;

        Ok(Self {
            weight_kg,
            height_cm,
            age,
            gender,
            activity_level,
            goal,
        })
    }

    /// Build inputs from raw caller strings, matched case-insensitively
    ///
    /// Fields are checked in declaration order and the first failure wins.
    pub fn parse(
        weight_kg: f64,
        height_cm: f64,
        age: i32,
        gender: &str,
        activity_level: &str,
        goal: &str,
    ) -> Result<Self, ValidationError> {
        validate_weight_kg(weight_kg)?;
        validate_height_cm(height_cm)?;
        validate_age(age)?;
        let gender = gender.parse()?;
        let activity_level = activity_level.parse()?;
        let goal = goal.parse()?;

        Ok(Self {
            weight_kg,
            height_cm,
            age,
            gender,
            activity_level,
            goal,
        })
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    pub fn goal(&self) -> DietGoal {
        self.goal
    }
}

/// Calculation result, every value rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub bmi: f64,
    /// kcal/day
    pub bmr: f64,
    /// Goal-adjusted TDEE, kcal/day
    pub daily_calories: f64,
}

// ============================================================================
// Formulas
// ============================================================================

/// Round to two decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender.bmr_offset()
}

/// Maintenance calories: TDEE = BMR × activity multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

/// Run the full calculation on validated inputs
///
/// BMR is carried unrounded into the TDEE step; rounding happens once per
/// output value. Finite inputs at the edges of `f64` can still overflow
/// (a huge weight) or divide by an underflowed height²; those fail with
/// `NotFinite` naming the input that drove the result out of range.
pub fn calculate_health_metrics(inputs: &HealthInputs) -> Result<HealthMetrics, ValidationError> {
    let height_m = inputs.height_cm / 100.0;
    let bmi = round2(calculate_bmi(inputs.weight_kg, inputs.height_cm));
    let bmr = calculate_bmr_mifflin(inputs.weight_kg, inputs.height_cm, inputs.age, inputs.gender);
    let maintenance = calculate_tdee(bmr, inputs.activity_level);
    let daily_calories = round2(maintenance + inputs.goal.calorie_adjustment());

    // BMI blows up through a tiny divisor or a huge numerator
    let bmi_field = if height_m * height_m < 1.0 { "height_cm" } else { "weight_kg" };
    let energy_field = if 10.0 * inputs.weight_kg >= 6.25 * inputs.height_cm {
        "weight_kg"
    } else {
        "height_cm"
    };

    Ok(HealthMetrics {
        bmi: ensure_finite(bmi_field, bmi)?,
        bmr: ensure_finite(energy_field, round2(bmr))?,
        daily_calories: ensure_finite(energy_field, daily_calories)?,
    })
}

/// Validate raw caller inputs and compute BMI, BMR and daily calories
pub fn compute(
    weight_kg: f64,
    height_cm: f64,
    age: i32,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> Result<HealthMetrics, ValidationError> {
    let inputs = HealthInputs::parse(weight_kg, height_cm, age, gender, activity_level, goal)?;
    calculate_health_metrics(&inputs)
}

// ============================================================================
// BMI Classification
// ============================================================================

/// BMI category used for display next to the computed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Half-open BMI range `[low, high)` for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
