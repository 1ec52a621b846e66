//! Stable sorting by a numeric record field.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;
use crate::types::PatientRecord;

/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// `height_cm`
    HeightCm,
    /// `weight_kg`
    WeightKg,
    /// Derived BMI
    Bmi,
}

impl SortField {
    /// Extracts the sort key. BMI may be absent when not computable.
    fn key(&self, record: &PatientRecord) -> Option<f64> {
        match self {
            SortField::HeightCm => Some(record.height_cm),
            SortField::WeightKg => Some(record.weight_kg),
            SortField::Bmi => record.bmi(),
        }
    }

    /// Returns the query-string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::HeightCm => "height_cm",
            SortField::WeightKg => "weight_kg",
            SortField::Bmi => "bmi",
        }
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height_cm" => Ok(SortField::HeightCm),
            "weight_kg" => Ok(SortField::WeightKg),
            "bmi" => Ok(SortField::Bmi),
            _ => Err(QueryError::InvalidSortField {
                field: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first (default).
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(QueryError::InvalidSortOrder {
                order: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Sorts by field and order given as strings.
///
/// Fails with [`QueryError`] for any field other than height_cm, weight_kg or
/// bmi, and any order other than asc or desc.
pub fn sort(
    records: Vec<PatientRecord>,
    field: &str,
    order: &str,
) -> Result<Vec<PatientRecord>, QueryError> {
    let field = field.parse::<SortField>()?;
    let order = order.parse::<SortOrder>()?;
    Ok(sort_by(records, field, order))
}

/// Sorts by a typed field and order.
///
/// The sort is stable in both directions: records with equal keys keep their
/// input order. Records without a computable BMI go last either way.
pub fn sort_by(
    mut records: Vec<PatientRecord>,
    field: SortField,
    order: SortOrder,
) -> Vec<PatientRecord> {
    records.sort_by(|a, b| compare(field.key(a), field.key(b), order));
    records
}

fn compare(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.total_cmp(&b),
            SortOrder::Desc => b.total_cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
