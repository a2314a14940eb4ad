//! Validation rules for the project input form.
//!
//! The defaults reproduce the board's built-in rules: a description longer
//! than five characters and between one and four people (the upper bound is
//! exclusive).

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default exclusive lower bound on description length.
pub const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;

/// Default inclusive lower bound on the people count.
pub const DEFAULT_PEOPLE_MIN: u32 = 1;

/// Default exclusive upper bound on the people count.
pub const DEFAULT_PEOPLE_MAX: u32 = 5;

/// Constraints applied to the input form on submission.
///
/// A value of zero disables the corresponding bound.
///
/// # Examples
///
/// ```
/// use dragboard_config::FormRules;
///
/// let rules = FormRules::default();
/// assert_eq!(rules.description_min_length, 5);
/// assert_eq!(rules.people_min, 1);
/// assert_eq!(rules.people_max, 5);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRules {
    /// Exclusive lower bound on the description length, in characters.
    #[serde(default = "default_description_min_length")]
    pub description_min_length: usize,

    /// Inclusive lower bound on the people count.
    #[serde(default = "default_people_min")]
    pub people_min: u32,

    /// Exclusive upper bound on the people count.
    #[serde(default = "default_people_max")]
    pub people_max: u32,
}

fn default_description_min_length() -> usize {
    DEFAULT_DESCRIPTION_MIN_LENGTH
}

fn default_people_min() -> u32 {
    DEFAULT_PEOPLE_MIN
}

fn default_people_max() -> u32 {
    DEFAULT_PEOPLE_MAX
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            people_min: DEFAULT_PEOPLE_MIN,
            people_max: DEFAULT_PEOPLE_MAX,
        }
    }
}

impl FormRules {
    /// Validates that the people range is not empty.
    ///
    /// # Errors
    ///
    /// Returns an error if both people bounds are set and
    /// `people_min >= people_max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_config::FormRules;
    ///
    /// let rules = FormRules { people_min: 4, people_max: 4, ..Default::default() };
    /// assert!(rules.validate().is_err());
    ///
    /// let open_ended = FormRules { people_max: 0, ..Default::default() };
    /// assert!(open_ended.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.people_min != 0 && self.people_max != 0 && self.people_min >= self.people_max {
            return Err(ConfigError::InvalidFormRules {
                reason: format!(
                    "people_min ({}) must be below people_max ({})",
                    self.people_min, self.people_max
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = FormRules::default();
        assert_eq!(rules.description_min_length, DEFAULT_DESCRIPTION_MIN_LENGTH);
        assert_eq!(rules.people_min, DEFAULT_PEOPLE_MIN);
        assert_eq!(rules.people_max, DEFAULT_PEOPLE_MAX);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let rules = FormRules {
            people_min: 6,
            people_max: 3,
            ..Default::default()
        };
        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("people_min (6)"));
    }

    #[test]
    fn zero_bounds_are_allowed() {
        let rules = FormRules {
            people_min: 0,
            people_max: 0,
            description_min_length: 0,
        };
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn deserialize_partial_uses_defaults() {
        let rules: FormRules = serde_json::from_str(r#"{"people_max": 10}"#).unwrap();
        assert_eq!(rules.people_max, 10);
        assert_eq!(rules.people_min, DEFAULT_PEOPLE_MIN);
        assert_eq!(rules.description_min_length, DEFAULT_DESCRIPTION_MIN_LENGTH);
    }
}
