//! Test fixtures for REST API testing.
//!
//! Five patients with hand-checked BMIs:
//!
//! | id | gender | age | height | weight | bmi |
//! |----|--------|-----|--------|--------|-----|
//! | P001 | female | 28 | 165 | 90 | 33.06 |
//! | P002 | male | 35 | 180 | 81 | 25.0 |
//! | P003 | female | 22 | 158 | 50 | 20.03 |
//! | P004 | male | 45 | 175 | 95 | 31.02 |
//! | P005 | other | 60 | 170 | 65 | 22.49 |

use serde_json::{Value, json};

use vitals_persistence::schema::validate_create;
use vitals_persistence::types::PatientRecord;

/// Builds a valid create body.
pub fn patient_json(
    id: &str,
    name: &str,
    age: u32,
    gender: &str,
    height_cm: f64,
    weight_kg: f64,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "age": age,
        "gender": gender,
        "contact": "9000000000",
        "address": "Guwahati",
        "height_cm": height_cm,
        "weight_kg": weight_kg,
        "medical_history": []
    })
}

/// Create bodies for the five seeded patients.
pub fn seed_bodies() -> Vec<Value> {
    vec![
        patient_json("P001", "Ananya Verma", 28, "female", 165.0, 90.0),
        patient_json("P002", "Ravi Mehta", 35, "male", 180.0, 81.0),
        patient_json("P003", "Sneha Kulkarni", 22, "female", 158.0, 50.0),
        patient_json("P004", "Arjun Singh", 45, "male", 175.0, 95.0),
        patient_json("P005", "Kiran Rao", 60, "other", 170.0, 65.0),
    ]
}

/// The five seeded patients as records.
pub fn seed_records() -> Vec<PatientRecord> {
    seed_bodies()
        .iter()
        .map(|body| validate_create(body).expect("fixture must be valid"))
        .collect()
}

/// Extracts the `id` of every record in a JSON array.
pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|p| p["id"].as_str().expect("record without id").to_string())
        .collect()
}
