//! Query engine: filtered, sorted and paginated views of the collection.
//!
//! Every function here is pure. It takes records as input and returns a new
//! sequence; the collection itself is never mutated.
//!
//! - [`filter`] - gender (case-insensitive) and inclusive age range
//! - [`filter_by_gender`] - strict match on the [`Gender`](crate::types::Gender) enum
//! - [`sort`] / [`sort_by`] - stable sort by height_cm, weight_kg or bmi
//! - [`paginate`] - offset/limit page with the full collection size

mod filter;
mod sort;

pub use filter::{DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, PatientFilter, filter, filter_by_gender};
pub use sort::{SortField, SortOrder, sort, sort_by};

use crate::types::Page;

/// Cuts the page `records[skip .. skip + limit]` out of `records`.
///
/// A `skip` past the end yields an empty page rather than an error. `total`
/// is always the length of `records`.
pub fn paginate<T: Clone>(records: &[T], skip: usize, limit: usize) -> Page<T> {
    let page = records.iter().skip(skip).take(limit).cloned().collect();
    Page {
        total: records.len(),
        skip,
        limit,
        page,
    }
}
