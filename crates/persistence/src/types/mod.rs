//! Core types for stored records and query results.
//!
//! - [`PatientRecord`] - a validated record, keyed by its id
//! - [`StoredPatient`] - the on-disk form of a record
//! - [`PatientUpdate`] - a partial update
//! - [`PatientView`] - a record rendered with its derived BMI
//! - [`Gender`] - the shared gender enumeration
//! - [`Page`] - one page of a paginated listing

mod gender;
mod pagination;
mod patient;

pub use gender::{Gender, InvalidGender};
pub use pagination::Page;
pub use patient::{Collection, PatientRecord, PatientUpdate, PatientView, StoredPatient};
