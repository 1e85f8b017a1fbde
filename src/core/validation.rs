//! Field validators over raw JSON payloads
//!
//! Request bodies are taken as `serde_json::Value` and checked field by
//! field, so type mismatches (a number where a string is required) surface
//! as 422 field errors instead of body-deserialization failures. Typed
//! input structs in `entities/` are built on top of these checks.

use crate::core::error::{ApiError, FieldErrors};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Accumulating validator over one JSON request body.
///
/// Field checks record errors instead of failing fast; `finish()` turns the
/// collected map into a single 422. A non-object body behaves as if every
/// field were absent.
pub struct Payload<'a> {
    object: Option<&'a Map<String, Value>>,
    errors: FieldErrors,
}

impl<'a> Payload<'a> {
    pub fn new(body: &'a Value) -> Self {
        Self {
            object: body.as_object(),
            errors: FieldErrors::new(),
        }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        // Explicit null is treated the same as an absent field
        self.object
            .and_then(|o| o.get(field))
            .filter(|v| !v.is_null())
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_default().push(message);
    }

    /// The field must be present and a non-empty JSON string.
    pub fn required_string(&mut self, field: &str) -> Option<String> {
        match self.get(field) {
            None => {
                self.push(field, format!("The {field} field is required."));
                None
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.push(field, format!("The {field} field is required."));
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(field, format!("The {field} field must be a string."));
                None
            }
        }
    }

    /// The field may be absent; when present it must be a non-empty string.
    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.get(field) {
            None => None,
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.push(field, format!("The {field} field is required."));
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(field, format!("The {field} field must be a string."));
                None
            }
        }
    }

    /// The field must be present and an array of UUID strings.
    pub fn required_id_array(&mut self, field: &str) -> Vec<Uuid> {
        match self.get(field) {
            None => {
                self.push(field, format!("The {field} field is required."));
                Vec::new()
            }
            Some(Value::Array(items)) => {
                let mut ids = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str().and_then(|s| Uuid::parse_str(s).ok()) {
                        Some(id) => ids.push(id),
                        None => {
                            self.push(
                                field,
                                format!("The {field} field must contain only valid ids."),
                            );
                            return Vec::new();
                        }
                    }
                }
                ids
            }
            Some(_) => {
                self.push(field, format!("The {field} field must be an array."));
                Vec::new()
            }
        }
    }

    /// Record a validation error against a field by hand.
    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.push(field, message.into());
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_string_present() {
        let body = json!({"name": "John Doe"});
        let mut p = Payload::new(&body);
        assert_eq!(p.required_string("name"), Some("John Doe".to_string()));
        assert!(p.finish().is_ok());
    }

    #[test]
    fn test_required_string_missing() {
        let body = json!({});
        let mut p = Payload::new(&body);
        assert_eq!(p.required_string("name"), None);
        let err = p.finish().unwrap_err();
        assert_eq!(err.to_string(), "The name field is required.");
    }

    #[test]
    fn test_required_string_empty_is_rejected() {
        let body = json!({"name": "  "});
        let mut p = Payload::new(&body);
        assert_eq!(p.required_string("name"), None);
        assert!(p.finish().is_err());
    }

    #[test]
    fn test_required_string_rejects_number() {
        let body = json!({"publication_year": 1980});
        let mut p = Payload::new(&body);
        assert_eq!(p.required_string("publication_year"), None);
        let err = p.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "The publication_year field must be a string."
        );
    }

    #[test]
    fn test_required_string_null_counts_as_missing() {
        let body = json!({"name": null});
        let mut p = Payload::new(&body);
        assert_eq!(p.required_string("name"), None);
        assert_eq!(
            p.finish().unwrap_err().to_string(),
            "The name field is required."
        );
    }

    #[test]
    fn test_optional_string_absent_is_ok() {
        let body = json!({});
        let mut p = Payload::new(&body);
        assert_eq!(p.optional_string("title"), None);
        assert!(p.finish().is_ok());
    }

    #[test]
    fn test_optional_string_wrong_type_is_rejected() {
        let body = json!({"title": 42});
        let mut p = Payload::new(&body);
        assert_eq!(p.optional_string("title"), None);
        assert!(p.finish().is_err());
    }

    #[test]
    fn test_required_id_array_collects_uuids() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let body = json!({"authors": [a.to_string(), b.to_string()]});
        let mut p = Payload::new(&body);
        assert_eq!(p.required_id_array("authors"), vec![a, b]);
        assert!(p.finish().is_ok());
    }

    #[test]
    fn test_required_id_array_missing() {
        let body = json!({});
        let mut p = Payload::new(&body);
        assert!(p.required_id_array("authors").is_empty());
        assert_eq!(
            p.finish().unwrap_err().to_string(),
            "The authors field is required."
        );
    }

    #[test]
    fn test_required_id_array_rejects_non_array() {
        let body = json!({"authors": "not-an-array"});
        let mut p = Payload::new(&body);
        assert!(p.required_id_array("authors").is_empty());
        assert_eq!(
            p.finish().unwrap_err().to_string(),
            "The authors field must be an array."
        );
    }

    #[test]
    fn test_required_id_array_rejects_bad_element() {
        let body = json!({"authors": [Uuid::new_v4().to_string(), "nope"]});
        let mut p = Payload::new(&body);
        assert!(p.required_id_array("authors").is_empty());
        assert!(p.finish().is_err());
    }

    #[test]
    fn test_non_object_body_reports_required_fields() {
        let body = json!(["a", "b"]);
        let mut p = Payload::new(&body);
        p.required_string("name");
        assert!(p.finish().is_err());
    }

    #[test]
    fn test_errors_accumulate_across_fields() {
        let body = json!({"title": 3});
        let mut p = Payload::new(&body);
        p.required_string("title");
        p.required_string("description");
        match p.finish().unwrap_err() {
            ApiError::Validation(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains_key("title"));
                assert!(errors.contains_key("description"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
