//! Record schema: validation entry points and the BMI calculation.
//!
//! Input arrives as already-parsed JSON. [`validate_create`] and
//! [`validate_update`] run every per-field validator in [`validators`] and
//! fail with a single [`ValidationError`] listing all violations.

pub mod validators;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{FieldViolation, ValidationError};
use crate::types::{PatientRecord, PatientUpdate};
use validators::{Presence, lookup};

/// Body Mass Index rounded to two decimals.
///
/// Returns `None` when either input is not a finite positive number, or when
/// the result overflows; callers must treat that as "not computable", never
/// as zero.
///
/// ```
/// use vitals_persistence::schema::compute_bmi;
///
/// assert_eq!(compute_bmi(180.0, 81.0), Some(25.0));
/// assert_eq!(compute_bmi(0.0, 70.0), None);
/// ```
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !(height_cm.is_finite() && weight_kg.is_finite()) || height_cm <= 0.0 || weight_kg <= 0.0
    {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some((bmi * 100.0).round() / 100.0).filter(|b| b.is_finite())
}

/// Validates a full record for creation.
pub fn validate_create(input: &Value) -> Result<PatientRecord, ValidationError> {
    let obj = as_object(input)?;
    let mut out = Vec::new();
    let req = Presence::Required;

    let id = lookup(obj, "id", req, &mut out)
        .and_then(|v| validators::non_empty_string("id", v, &mut out));
    let name = lookup(obj, "name", req, &mut out)
        .and_then(|v| validators::non_empty_string("name", v, &mut out));
    let age = lookup(obj, "age", req, &mut out).and_then(|v| validators::age(v, &mut out));
    let gender =
        lookup(obj, "gender", req, &mut out).and_then(|v| validators::gender(v, &mut out));
    let contact = lookup(obj, "contact", req, &mut out)
        .and_then(|v| validators::string("contact", v, &mut out));
    let address = lookup(obj, "address", req, &mut out)
        .and_then(|v| validators::string("address", v, &mut out));
    let height_cm = lookup(obj, "height_cm", req, &mut out)
        .and_then(|v| validators::positive_number("height_cm", v, &mut out));
    let weight_kg = lookup(obj, "weight_kg", req, &mut out)
        .and_then(|v| validators::positive_number("weight_kg", v, &mut out));
    let medical_history = match lookup(obj, "medical_history", Presence::Optional, &mut out) {
        Some(v) => validators::string_list("medical_history", v, &mut out),
        None => Some(Vec::new()),
    };

    match (
        id,
        name,
        age,
        gender,
        contact,
        address,
        height_cm,
        weight_kg,
        medical_history,
    ) {
        (
            Some(id),
            Some(name),
            Some(age),
            Some(gender),
            Some(contact),
            Some(address),
            Some(height_cm),
            Some(weight_kg),
            Some(medical_history),
        ) if out.is_empty() => Ok(PatientRecord {
            id,
            name,
            age,
            gender,
            contact,
            address,
            height_cm,
            weight_kg,
            medical_history,
        }),
        _ => Err(reject(out)),
    }
}

/// Validates a partial update. Only supplied fields are checked.
pub fn validate_update(input: &Value) -> Result<PatientUpdate, ValidationError> {
    let obj = as_object(input)?;
    let mut out = Vec::new();
    let opt = Presence::Optional;

    if lookup(obj, "id", opt, &mut out).is_some() {
        out.push(FieldViolation::new("id", "cannot be changed"));
    }

    let update = PatientUpdate {
        name: lookup(obj, "name", opt, &mut out)
            .and_then(|v| validators::non_empty_string("name", v, &mut out)),
        age: lookup(obj, "age", opt, &mut out).and_then(|v| validators::age(v, &mut out)),
        gender: lookup(obj, "gender", opt, &mut out)
            .and_then(|v| validators::gender(v, &mut out)),
        contact: lookup(obj, "contact", opt, &mut out)
            .and_then(|v| validators::string("contact", v, &mut out)),
        address: lookup(obj, "address", opt, &mut out)
            .and_then(|v| validators::string("address", v, &mut out)),
        height_cm: lookup(obj, "height_cm", opt, &mut out)
            .and_then(|v| validators::positive_number("height_cm", v, &mut out)),
        weight_kg: lookup(obj, "weight_kg", opt, &mut out)
            .and_then(|v| validators::positive_number("weight_kg", v, &mut out)),
        medical_history: lookup(obj, "medical_history", opt, &mut out)
            .and_then(|v| validators::string_list("medical_history", v, &mut out)),
    };

    if out.is_empty() {
        Ok(update)
    } else {
        Err(reject(out))
    }
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationError> {
    input
        .as_object()
        .ok_or_else(|| ValidationError::single("body", "must be a JSON object"))
}

fn reject(violations: Vec<FieldViolation>) -> ValidationError {
    debug!(count = violations.len(), "Patient payload rejected");
    ValidationError::new(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "id": "P001",
            "name": "Ananya Verma",
            "age": 28,
            "gender": "female",
            "contact": "9876543210",
            "address": "Guwahati",
            "height_cm": 165,
            "weight_kg": 90.0
        })
    }

    #[test]
    fn test_compute_bmi() {
        assert_eq!(compute_bmi(180.0, 81.0), Some(25.0));
        assert_eq!(compute_bmi(165.0, 90.0), Some(33.06));
        assert_eq!(compute_bmi(0.0, 70.0), None);
        assert_eq!(compute_bmi(170.0, -1.0), None);
        assert_eq!(compute_bmi(f64::NAN, 70.0), None);
    }

    #[test]
    fn test_compute_bmi_overflow_is_not_computable() {
        assert_eq!(compute_bmi(1e-200, 70.0), None);
        assert_eq!(compute_bmi(170.0, f64::MAX), None);
    }

    #[test]
    fn test_validate_create_ok() {
        let record = validate_create(&valid_payload()).unwrap();
        assert_eq!(record.id, "P001");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.height_cm, 165.0);
        assert!(record.medical_history.is_empty());
    }

    #[test]
    fn test_validate_create_reports_every_violation() {
        let mut payload = valid_payload();
        payload["age"] = json!(150);
        payload["gender"] = json!("unknown");
        payload["height_cm"] = json!(0);
        payload.as_object_mut().unwrap().remove("name");

        let err = validate_create(&payload).unwrap_err();
        assert_eq!(err.violations.len(), 4);
        for field in ["age", "gender", "height_cm", "name"] {
            assert!(err.has_field(field), "missing violation for {}", field);
        }
    }

    #[test]
    fn test_validate_create_wrong_types() {
        let mut payload = valid_payload();
        payload["age"] = json!("twenty");
        payload["contact"] = json!(12345);
        payload["medical_history"] = json!("asthma");

        let err = validate_create(&payload).unwrap_err();
        assert!(err.has_field("age"));
        assert!(err.has_field("contact"));
        assert!(err.has_field("medical_history"));
    }

    #[test]
    fn test_validate_create_rejects_non_object() {
        let err = validate_create(&json!([1, 2, 3])).unwrap_err();
        assert!(err.has_field("body"));
    }

    #[test]
    fn test_validate_update_checks_only_supplied_fields() {
        let update = validate_update(&json!({"weight_kg": 72.5})).unwrap();
        assert_eq!(update.weight_kg, Some(72.5));
        assert!(update.name.is_none());

        let update = validate_update(&json!({})).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_validate_update_rejects_bad_values() {
        let err = validate_update(&json!({"age": 0, "gender": "MALE", "weight_kg": -3}))
            .unwrap_err();
        assert_eq!(err.violations.len(), 3);
    }

    #[test]
    fn test_validate_update_rejects_id() {
        let err = validate_update(&json!({"id": "P999"})).unwrap_err();
        assert!(err.has_field("id"));
    }
}
