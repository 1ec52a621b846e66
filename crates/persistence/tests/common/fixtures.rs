//! Test fixtures for persistence layer testing.
//!
//! Provides a builder for patient records and a small seeded collection.

use serde_json::{Value, json};

use vitals_persistence::types::{Gender, PatientRecord};

/// A patient fixture for testing.
#[derive(Debug, Clone)]
pub struct PatientFixture {
    record: PatientRecord,
}

impl PatientFixture {
    /// Creates a fixture with plausible defaults.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            record: PatientRecord {
                name: format!("Patient {}", id),
                id,
                age: 30,
                gender: Gender::Other,
                contact: "9000000000".to_string(),
                address: "Bengaluru".to_string(),
                height_cm: 170.0,
                weight_kg: 65.0,
                medical_history: vec![],
            },
        }
    }

    /// Sets age.
    pub fn age(mut self, age: u32) -> Self {
        self.record.age = age;
        self
    }

    /// Sets gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.record.gender = gender;
        self
    }

    /// Sets height and weight.
    pub fn body(mut self, height_cm: f64, weight_kg: f64) -> Self {
        self.record.height_cm = height_cm;
        self.record.weight_kg = weight_kg;
        self
    }

    /// Sets medical history.
    pub fn history(mut self, items: &[&str]) -> Self {
        self.record.medical_history = items.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Builds the record.
    pub fn build(self) -> PatientRecord {
        self.record
    }
}

/// Ten records P001..P010 with varied ages, genders and BMIs.
pub fn ten_patients() -> Vec<PatientRecord> {
    let genders = [Gender::Male, Gender::Female, Gender::Other];
    (1..=10)
        .map(|i| {
            PatientFixture::new(format!("P{:03}", i))
                .age(15 + i * 5)
                .gender(genders[(i as usize) % 3])
                .body(150.0 + f64::from(i) * 3.0, 50.0 + f64::from(i) * 4.0)
                .build()
        })
        .collect()
}

/// A raw data file in the layout the service persists, including a stale
/// `bmi` key and a `null` medical history as older writers left them.
pub fn legacy_data_file() -> Value {
    json!({
        "P001": {
            "name": "Ananya Verma",
            "age": 28,
            "gender": "female",
            "contact": "9876543210",
            "address": "Guwahati",
            "height_cm": 165.0,
            "weight_kg": 90.0,
            "medical_history": null,
            "bmi": 12.34
        },
        "P002": {
            "name": "Ravi Mehta",
            "age": 35,
            "gender": "male",
            "contact": "9123456789",
            "address": "Mumbai",
            "height_cm": 180.0,
            "weight_kg": 81.0,
            "medical_history": ["hypertension"]
        }
    })
}
