//! Input validation functions
//!
//! Every check here runs before any calculation. Enumerated inputs go through
//! a single normalization step (trim + lowercase) and are then matched against
//! the accepted values listed below.

use crate::errors::ValidationError;

/// Valid gender values
pub const VALID_GENDERS: &[&str] = &["male", "female"];

/// Valid activity levels, least to most active
pub const VALID_ACTIVITY_LEVELS: &[&str] = &["sedentary", "light", "moderate", "active", "very active"];

/// Valid diet goals
pub const VALID_GOALS: &[&str] = &["weight loss", "maintenance", "weight gain"];

/// Normalize an enumerated input before matching
pub fn normalize_choice(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Match `value` against `allowed`, returning the index of the accepted entry
///
/// The index lines up with the order of the `VALID_*` constants, which the
/// enum parsers rely on.
pub fn match_choice(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<usize, ValidationError> {
    let normalized = normalize_choice(value);
    allowed
        .iter()
        .position(|candidate| *candidate == normalized)
        .ok_or_else(|| ValidationError::InvalidChoice {
            field,
            value: value.to_string(),
            allowed,
        })
}

/// Validate a real-valued magnitude: finite and strictly positive
///
/// NaN fails the positivity check; infinities are rejected separately so
/// they never reach the formulas.
pub fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_infinite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value.is_nan() || value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), ValidationError> {
    validate_positive("weight_kg", weight_kg)
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), ValidationError> {
    validate_positive("height_cm", height_cm)
}

/// Validate age in whole years
pub fn validate_age(age: i32) -> Result<(), ValidationError> {
    if age <= 0 {
        return Err(ValidationError::NotPositive {
            field: "age",
            value: f64::from(age),
        });
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight_kg" | "weight" => "Weight",
        "height_cm" | "height" => "Height",
        "age" => "Age",
        "gender" => "Gender",
        "activity_level" => "Activity Level",
        "goal" => "Diet Goal",
        _ => field_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_normalize_choice() {
        assert_eq!(normalize_choice("  Very Active "), "very active");
        assert_eq!(normalize_choice("MALE"), "male");
        assert_eq!(normalize_choice(""), "");
    }

    #[rstest]
    #[case("male", 0)]
    #[case("Female", 1)]
    #[case(" FEMALE\t", 1)]
    fn test_match_choice_accepts(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(match_choice("gender", input, VALID_GENDERS), Ok(expected));
    }

    #[rstest]
    #[case("other")]
    #[case("")]
    #[case("m")]
    fn test_match_choice_rejects(#[case] input: &str) {
        let err = match_choice("gender", input, VALID_GENDERS).unwrap_err();
        assert_eq!(err.field(), "gender");
        assert!(err.to_string().contains("male, female"));
    }

    #[test]
    fn test_match_choice_keeps_raw_value_in_error() {
        let err = match_choice("goal", " Bulk ", VALID_GOALS).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidChoice {
                field: "goal",
                value: " Bulk ".to_string(),
                allowed: VALID_GOALS,
            }
        );
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(0.1).is_ok());
        assert!(validate_weight_kg(0.0).is_err());
        assert!(validate_weight_kg(-5.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert_eq!(
            validate_weight_kg(f64::INFINITY),
            Err(ValidationError::NotFinite { field: "weight_kg" })
        );
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(175.0).is_ok());
        assert!(validate_height_cm(0.0).is_err());
        assert!(validate_height_cm(-10.0).is_err());
        assert!(validate_height_cm(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age(1).is_ok());
        assert!(validate_age(30).is_ok());
        assert_eq!(
            validate_age(0),
            Err(ValidationError::NotPositive { field: "age", value: 0.0 })
        );
        assert!(validate_age(-1).is_err());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("weight_kg"), "Weight");
        assert_eq!(get_field_display_label("activity_level"), "Activity Level");
        assert_eq!(get_field_display_label("goal"), "Diet Goal");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_positive_magnitudes_accepted(value in 0.001f64..10_000.0) {
            prop_assert!(validate_positive("weight_kg", value).is_ok());
        }

        #[test]
        fn prop_non_positive_magnitudes_rejected(value in -10_000.0f64..=0.0) {
            prop_assert!(validate_positive("weight_kg", value).is_err());
        }

        /// Property: accepted values survive arbitrary ASCII case changes
        #[test]
        fn prop_match_choice_ignores_case(index in 0usize..5, mask in any::<u64>()) {
            let canonical = VALID_ACTIVITY_LEVELS[index];
            let mixed: String = canonical
                .chars()
                .enumerate()
                .map(|(i, c)| if (mask >> (i % 64)) & 1 == 1 { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(match_choice("activity_level", &mixed, VALID_ACTIVITY_LEVELS), Ok(index));
        }
    }
}
