//! Field validation for user input.
//!
//! A [`Validatable`] describes the constraints of one field for one
//! submission. [`validate`] checks a descriptor and reports whether every
//! applicable constraint holds.
//!
//! # Semantics
//!
//! | Constraint | Applies to | Passes when |
//! |------------|------------|-------------|
//! | `required` | both | the trimmed string form is non-empty |
//! | `min_length` | text | `length > min_length` |
//! | `max_length` | text | `length < max_length` |
//! | `min` | number | `value >= min` |
//! | `max` | number | `value < max` |
//!
//! Constraints for the other value kind are skipped. A bound of zero (or NaN)
//! counts as absent, so `min_length: Some(0)` checks nothing.
//!
//! Length is the number of `char`s (Unicode scalar values), not UTF-16 code
//! units or bytes: `"😀😀😀"` has length 3 and fails `min_length(5)`, where
//! a UTF-16 count of 6 would pass.

use std::fmt;

/// The value of a form field as seen by the validator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A free-text value.
    Text(String),
    /// A numeric value. Unparsable numeric input is `NaN`.
    Number(f64),
}

impl FieldValue {
    /// Parses numeric form input the way a numeric input field reports it.
    ///
    /// Blank input is `0`, anything unparsable is `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::FieldValue;
    ///
    /// assert_eq!(FieldValue::parse_number(" 3 "), FieldValue::Number(3.0));
    /// assert_eq!(FieldValue::parse_number(""), FieldValue::Number(0.0));
    /// assert!(matches!(FieldValue::parse_number("x"), FieldValue::Number(n) if n.is_nan()));
    /// ```
    #[must_use]
    pub fn parse_number(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::Number(0.0);
        }
        Self::Number(trimmed.parse().unwrap_or(f64::NAN))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) if n.is_nan() => f.write_str("NaN"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The constraints of a single field for a single submission.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::{Validatable, validate};
///
/// let description = Validatable::text("ab").required().min_length(5);
/// assert!(!validate(&description));
///
/// let people = Validatable::number(3.0).required().min(1.0).max(5.0);
/// assert!(validate(&people));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    /// The value under test.
    pub value: FieldValue,
    /// Whether the value must be non-blank.
    pub required: bool,
    /// Exclusive lower bound on text length.
    pub min_length: Option<usize>,
    /// Exclusive upper bound on text length.
    pub max_length: Option<usize>,
    /// Inclusive lower bound on numeric values.
    pub min: Option<f64>,
    /// Exclusive upper bound on numeric values.
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates an unconstrained descriptor for a value.
    #[must_use]
    pub fn new(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Creates an unconstrained descriptor for a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    /// Creates an unconstrained descriptor for a numeric value.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    /// Marks the value as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the exclusive lower bound on text length.
    #[must_use]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the exclusive upper bound on text length.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the inclusive lower bound on numeric values.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the exclusive upper bound on numeric values.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns `true` if every applicable constraint of the descriptor holds.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::{Validatable, validate};
///
/// assert!(validate(&Validatable::text("abcdef").required().min_length(5)));
/// assert!(!validate(&Validatable::number(5.0).max(5.0)));
/// ```
#[must_use]
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid &= !input.value.to_string().trim().is_empty();
    }

    match &input.value {
        FieldValue::Text(text) => {
            let length = text.chars().count();
            if let Some(min_length) = input.min_length.filter(|&n| n != 0) {
                is_valid &= length > min_length;
            }
            if let Some(max_length) = input.max_length.filter(|&n| n != 0) {
                is_valid &= length < max_length;
            }
        }
        FieldValue::Number(value) => {
            if let Some(min) = input.min.filter(|&n| is_set(n)) {
                is_valid &= *value >= min;
            }
            if let Some(max) = input.max.filter(|&n| is_set(n)) {
                is_valid &= *value < max;
            }
        }
    }

    is_valid
}

fn is_set(bound: f64) -> bool {
    bound != 0.0 && !bound.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_fails_min_length() {
        let input = Validatable::text("ab").required().min_length(5);
        assert!(!validate(&input));
    }

    #[test]
    fn long_text_passes_min_length() {
        let input = Validatable::text("abcdef").required().min_length(5);
        assert!(validate(&input));
    }

    #[test]
    fn min_length_is_exclusive() {
        assert!(!validate(&Validatable::text("abcde").min_length(5)));
    }

    #[test]
    fn number_within_range_passes() {
        let input = Validatable::number(3.0).required().min(1.0).max(5.0);
        assert!(validate(&input));
    }

    #[test]
    fn max_is_exclusive() {
        assert!(!validate(&Validatable::number(5.0).max(5.0)));
        assert!(validate(&Validatable::number(4.0).max(5.0)));
    }

    #[test]
    fn min_is_inclusive() {
        assert!(validate(&Validatable::number(1.0).min(1.0)));
        assert!(!validate(&Validatable::number(0.0).min(1.0)));
    }

    #[test]
    fn required_rejects_blank_text() {
        assert!(!validate(&Validatable::text("").required()));
        assert!(!validate(&Validatable::text("   ").required()));
        assert!(validate(&Validatable::text(" x ").required()));
    }

    #[test]
    fn required_accepts_any_number() {
        assert!(validate(&Validatable::number(0.0).required()));
        assert!(validate(&Validatable::number(f64::NAN).required()));
    }

    #[test]
    fn not_required_accepts_blank() {
        assert!(validate(&Validatable::text("")));
    }

    #[test]
    fn max_length_is_exclusive() {
        assert!(validate(&Validatable::text("abcd").max_length(5)));
        assert!(!validate(&Validatable::text("abcde").max_length(5)));
    }

    #[test]
    fn length_counts_characters() {
        assert!(validate(&Validatable::text("héllo!").min_length(5)));
        // Three chars, even though each is two UTF-16 code units.
        assert!(!validate(&Validatable::text("😀😀😀").min_length(5)));
        assert!(validate(&Validatable::text("😀😀😀😀😀😀").min_length(5)));
    }

    #[test]
    fn mismatched_constraints_are_skipped() {
        let text = Validatable::text("x").min(10.0).max(11.0);
        assert!(validate(&text));

        let number = Validatable::number(1.0).min_length(10).max_length(2);
        assert!(validate(&number));
    }

    #[test]
    fn zero_bounds_are_treated_as_absent() {
        assert!(validate(&Validatable::text("abc").max_length(0)));
        assert!(validate(&Validatable::number(-3.0).min(0.0)));
        assert!(validate(&Validatable::number(7.0).max(0.0)));
    }

    #[test]
    fn nan_value_fails_numeric_bounds() {
        assert!(!validate(&Validatable::number(f64::NAN).min(1.0)));
        assert!(!validate(&Validatable::number(f64::NAN).max(5.0)));
    }

    #[test]
    fn parse_number_matches_numeric_input() {
        assert_eq!(FieldValue::parse_number("4"), FieldValue::Number(4.0));
        assert_eq!(FieldValue::parse_number("   "), FieldValue::Number(0.0));
        assert!(matches!(FieldValue::parse_number("four"), FieldValue::Number(n) if n.is_nan()));
    }

    #[test]
    fn display_uses_string_form() {
        assert_eq!(FieldValue::Number(3.0).to_string(), "3");
        assert_eq!(FieldValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(FieldValue::Text("abc".to_string()).to_string(), "abc");
    }
}
