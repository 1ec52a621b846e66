//! The shared gender enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gender of a patient.
///
/// Used both as the strict schema constraint on stored records and as the
/// path parameter of the gender filter, so the allowed set lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// `"male"`
    Male,
    /// `"female"`
    Female,
    /// `"other"`
    Other,
}

impl Gender {
    /// Returns the wire form of this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Case-insensitive comparison against a free-form query string.
    pub fn matches(&self, value: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(value)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not an allowed gender.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("gender must be one of male, female, other (got '{0}')")]
pub struct InvalidGender(pub String);

impl FromStr for Gender {
    type Err = InvalidGender;

    /// Strict parse: only the exact lowercase literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(InvalidGender(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_strict() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("other".parse::<Gender>().unwrap(), Gender::Other);
        assert!("Male".parse::<Gender>().is_err());
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_matches_ignores_case() {
        assert!(Gender::Male.matches("MALE"));
        assert!(Gender::Male.matches("Male"));
        assert!(!Gender::Male.matches("female"));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        let g: Gender = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(g, Gender::Other);
    }
}
