//! Per-field validators.
//!
//! Each validator checks one field, pushes any violation onto the shared list
//! and returns the typed value when the field is usable. The entry points in
//! the parent module compose them so that every violation is reported at once.

use serde_json::{Map, Value};

use crate::error::FieldViolation;
use crate::types::Gender;

/// Exclusive lower bound for `age`.
pub const MIN_AGE_EXCLUSIVE: u32 = 0;
/// Exclusive upper bound for `age`.
pub const MAX_AGE_EXCLUSIVE: u32 = 120;

/// Whether a missing field is a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    Required,
    Optional,
}

/// Looks up `name`, reporting it as missing when required.
///
/// A JSON `null` is treated the same as an absent key.
pub(crate) fn lookup<'a>(
    obj: &'a Map<String, Value>,
    name: &str,
    presence: Presence,
    out: &mut Vec<FieldViolation>,
) -> Option<&'a Value> {
    match obj.get(name) {
        Some(Value::Null) | None => {
            if presence == Presence::Required {
                out.push(FieldViolation::new(name, "field required"));
            }
            None
        }
        Some(value) => Some(value),
    }
}

/// Any string.
pub(crate) fn string(name: &str, value: &Value, out: &mut Vec<FieldViolation>) -> Option<String> {
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => {
            out.push(FieldViolation::new(name, "must be a string"));
            None
        }
    }
}

/// A string with at least one non-whitespace character.
pub(crate) fn non_empty_string(
    name: &str,
    value: &Value,
    out: &mut Vec<FieldViolation>,
) -> Option<String> {
    let s = string(name, value, out)?;
    if s.trim().is_empty() {
        out.push(FieldViolation::new(name, "must not be empty"));
        return None;
    }
    Some(s)
}

/// An integer strictly between 0 and 120.
pub(crate) fn age(value: &Value, out: &mut Vec<FieldViolation>) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    };
    let Some(n) = n else {
        out.push(FieldViolation::new("age", "must be an integer"));
        return None;
    };

    if n <= i64::from(MIN_AGE_EXCLUSIVE) || n >= i64::from(MAX_AGE_EXCLUSIVE) {
        out.push(FieldViolation::new(
            "age",
            format!(
                "must be greater than {} and less than {} (got {})",
                MIN_AGE_EXCLUSIVE, MAX_AGE_EXCLUSIVE, n
            ),
        ));
        return None;
    }
    u32::try_from(n).ok()
}

/// One of the allowed gender literals.
pub(crate) fn gender(value: &Value, out: &mut Vec<FieldViolation>) -> Option<Gender> {
    let s = string("gender", value, out)?;
    match s.parse::<Gender>() {
        Ok(g) => Some(g),
        Err(e) => {
            out.push(FieldViolation::new("gender", e.to_string()));
            None
        }
    }
}

/// A finite number greater than zero (height, weight).
pub(crate) fn positive_number(
    name: &str,
    value: &Value,
    out: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let Some(n) = value.as_f64() else {
        out.push(FieldViolation::new(name, "must be a number"));
        return None;
    };
    if !n.is_finite() || n <= 0.0 {
        out.push(FieldViolation::new(
            name,
            format!("must be greater than 0 (got {})", n),
        ));
        return None;
    }
    Some(n)
}

/// A list of strings; offending items are reported by index.
pub(crate) fn string_list(
    name: &str,
    value: &Value,
    out: &mut Vec<FieldViolation>,
) -> Option<Vec<String>> {
    let Some(items) = value.as_array() else {
        out.push(FieldViolation::new(name, "must be a list of strings"));
        return None;
    };

    let before = out.len();
    let list: Vec<String> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match item.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                out.push(FieldViolation::new(
                    format!("{}[{}]", name, i),
                    "must be a string",
                ));
                None
            }
        })
        .collect();

    (out.len() == before).then_some(list)
}
