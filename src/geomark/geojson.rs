//! GeoJSON Feature payload validation.
//!
//! A submitted `feature` must look like a GeoJSON Feature: `type` equal to
//! `"Feature"`, a `geometry` object with a `type` string and a `coordinates`
//! array, and optionally a `properties` object. Nothing beyond shape is
//! checked; coordinate contents are opaque to geomark.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Field-level validation failures, keyed by the dotted field path.
/// Serializes to the `{"field": ["message", ...]}` map the API returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Validate a `feature` payload. Collects every failing field rather than
/// stopping at the first, so the client can surface all of them at once.
pub fn validate_feature(payload: &Value) -> std::result::Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let Some(feature) = payload.as_object() else {
        errors.add("feature", "must be a JSON object");
        return Err(errors);
    };

    match feature.get("type") {
        Some(Value::String(tag)) if tag == "Feature" => {}
        Some(Value::String(tag)) => {
            errors.add("feature.type", format!("must be \"Feature\", got \"{}\"", tag))
        }
        Some(_) => errors.add("feature.type", "must be a string"),
        None => errors.add("feature.type", "is required"),
    }

    match feature.get("geometry") {
        Some(Value::Object(geometry)) => {
            match geometry.get("type") {
                Some(Value::String(t)) if !t.trim().is_empty() => {}
                Some(Value::String(_)) => errors.add("feature.geometry.type", "is required"),
                Some(_) => errors.add("feature.geometry.type", "must be a string"),
                None => errors.add("feature.geometry.type", "is required"),
            }
            match geometry.get("coordinates") {
                Some(Value::Array(_)) => {}
                Some(_) => errors.add("feature.geometry.coordinates", "must be an array"),
                None => errors.add("feature.geometry.coordinates", "is required"),
            }
        }
        Some(_) => errors.add("feature.geometry", "must be an object"),
        None => errors.add("feature.geometry", "is required"),
    }

    // properties is nullable but must be an object when present
    match feature.get("properties") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(_) => errors.add("feature.properties", "must be an object"),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
