//! Patient record types.
//!
//! A [`PatientRecord`] is what the store holds, a [`StoredPatient`] is the
//! shape written to the backing file (keyed by id, so the id is not repeated),
//! a [`PatientUpdate`] is a partial update and a [`PatientView`] is a record
//! rendered together with its derived BMI.

// Field meanings and constraints are documented on the validators in `schema`
#![allow(missing_docs)]

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::Gender;
use crate::schema::compute_bmi;

/// The full collection, keyed by patient id.
///
/// Iteration order is by id, which keeps listings and rewrites of the backing
/// file deterministic.
pub type Collection = BTreeMap<String, PatientRecord>;

/// A validated patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Collection key; immutable once created.
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: String,
    pub address: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub medical_history: Vec<String>,
}

impl PatientRecord {
    /// Derived BMI, `None` when height or weight is not positive.
    pub fn bmi(&self) -> Option<f64> {
        compute_bmi(self.height_cm, self.weight_kg)
    }

    /// Applies the supplied fields of `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: PatientUpdate) {
        let PatientUpdate {
            name,
            age,
            gender,
            contact,
            address,
            height_cm,
            weight_kg,
            medical_history,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(age) = age {
            self.age = age;
        }
        if let Some(gender) = gender {
            self.gender = gender;
        }
        if let Some(contact) = contact {
            self.contact = contact;
        }
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(height_cm) = height_cm {
            self.height_cm = height_cm;
        }
        if let Some(weight_kg) = weight_kg {
            self.weight_kg = weight_kg;
        }
        if let Some(medical_history) = medical_history {
            self.medical_history = medical_history;
        }
    }

    /// Renders this record together with its BMI.
    pub fn view(&self) -> PatientView {
        PatientView::from(self.clone())
    }
}

/// The persisted form of a record: every field except the id.
///
/// Unknown keys (a `bmi` left by an older writer, for instance) are ignored on
/// load and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPatient {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: String,
    pub address: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub medical_history: Vec<String>,
}

impl StoredPatient {
    /// Attaches the collection key to produce a record.
    pub fn into_record(self, id: String) -> PatientRecord {
        PatientRecord {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            contact: self.contact,
            address: self.address,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            medical_history: self.medical_history,
        }
    }
}

impl From<&PatientRecord> for StoredPatient {
    fn from(record: &PatientRecord) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age,
            gender: record.gender,
            contact: record.contact.clone(),
            address: record.address.clone(),
            height_cm: record.height_cm,
            weight_kg: record.weight_kg,
            medical_history: record.medical_history.clone(),
        }
    }
}

/// A partial update. Absent fields are left unchanged on the target record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<Vec<String>>,
}

impl PatientUpdate {
    /// BMI of the update payload alone; requires both height and weight.
    pub fn bmi(&self) -> Option<f64> {
        match (self.height_cm, self.weight_kg) {
            (Some(h), Some(w)) => compute_bmi(h, w),
            _ => None,
        }
    }

    /// Returns true if no field is supplied.
    pub fn is_empty(&self) -> bool {
        *self == PatientUpdate::default()
    }
}

/// A record as rendered to callers, with the derived BMI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientView {
    #[serde(flatten)]
    pub record: PatientRecord,
    /// `null` when not computable.
    pub bmi: Option<f64>,
}

impl From<PatientRecord> for PatientView {
    fn from(record: PatientRecord) -> Self {
        let bmi = record.bmi();
        Self { record, bmi }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> PatientRecord {
        PatientRecord {
            id: "P001".to_string(),
            name: "Ananya Verma".to_string(),
            age: 28,
            gender: Gender::Female,
            contact: "9876543210".to_string(),
            address: "Guwahati".to_string(),
            height_cm: 165.0,
            weight_kg: 90.0,
            medical_history: vec![],
        }
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut record = sample();
        record.apply(PatientUpdate {
            weight_kg: Some(70.0),
            address: Some("Shillong".to_string()),
            ..Default::default()
        });

        assert_eq!(record.weight_kg, 70.0);
        assert_eq!(record.address, "Shillong");
        assert_eq!(record.name, "Ananya Verma");
        assert_eq!(record.height_cm, 165.0);
        assert_eq!(record.gender, Gender::Female);
    }

    #[test]
    fn test_update_bmi_needs_both_fields() {
        let update = PatientUpdate {
            height_cm: Some(180.0),
            ..Default::default()
        };
        assert_eq!(update.bmi(), None);

        let update = PatientUpdate {
            height_cm: Some(180.0),
            weight_kg: Some(81.0),
            ..Default::default()
        };
        assert_eq!(update.bmi(), Some(25.0));
    }

    #[test]
    fn test_stored_form_ignores_bmi_and_null_history() {
        let stored: StoredPatient = serde_json::from_value(json!({
            "name": "Ravi",
            "age": 40,
            "gender": "male",
            "contact": "1",
            "address": "Pune",
            "height_cm": 170.0,
            "weight_kg": 70.0,
            "medical_history": null,
            "bmi": 999.0
        }))
        .unwrap();

        assert!(stored.medical_history.is_empty());
        let written = serde_json::to_value(&stored).unwrap();
        assert!(written.get("bmi").is_none());
        assert!(written.get("id").is_none());
    }

    #[test]
    fn test_view_includes_bmi() {
        let view = serde_json::to_value(sample().view()).unwrap();
        assert_eq!(view["id"], "P001");
        assert_eq!(view["bmi"], json!(33.06));
    }
}
