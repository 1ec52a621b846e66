//! Gender and age-range filtering.

use tracing::debug;

use crate::error::ResourceError;
use crate::types::{Gender, PatientRecord};

/// Default lower age bound (inclusive).
pub const DEFAULT_MIN_AGE: u32 = 0;
/// Default upper age bound (inclusive).
pub const DEFAULT_MAX_AGE: u32 = 120;

/// Criteria for [`filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientFilter {
    /// Free-form gender, compared case-insensitively. `None` keeps every gender.
    pub gender: Option<String>,
    /// Inclusive lower bound.
    pub min_age: u32,
    /// Inclusive upper bound.
    pub max_age: u32,
}

impl Default for PatientFilter {
    fn default() -> Self {
        Self {
            gender: None,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl PatientFilter {
    /// Returns true if `record` satisfies every criterion.
    pub fn matches(&self, record: &PatientRecord) -> bool {
        let gender_ok = match self.gender.as_deref() {
            None | Some("") => true,
            Some(g) => record.gender.matches(g),
        };
        gender_ok && self.min_age <= record.age && record.age <= self.max_age
    }
}

/// Keeps the records matching `criteria`, in input order.
///
/// An empty result is reported as [`ResourceError::NoMatches`].
pub fn filter(
    records: &[PatientRecord],
    criteria: &PatientFilter,
) -> Result<Vec<PatientRecord>, ResourceError> {
    let matched: Vec<PatientRecord> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();

    debug!(
        input = records.len(),
        matched = matched.len(),
        gender = ?criteria.gender,
        min_age = criteria.min_age,
        max_age = criteria.max_age,
        "Filtered patients"
    );

    if matched.is_empty() {
        return Err(ResourceError::NoMatches);
    }
    Ok(matched)
}

/// Keeps the records whose gender is exactly `gender`.
///
/// Unknown gender strings never reach this point: they fail to parse into
/// [`Gender`]. An empty result is a valid empty list.
pub fn filter_by_gender(records: &[PatientRecord], gender: Gender) -> Vec<PatientRecord> {
    records
        .iter()
        .filter(|r| r.gender == gender)
        .cloned()
        .collect()
}
