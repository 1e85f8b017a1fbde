//! The `Author` entity and its create/update inputs

use crate::core::error::ApiError;
use crate::core::query::Listable;
use crate::core::validation::Payload;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use uuid::Uuid;

/// A persisted author record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Fields a listing may sort on
    pub const SORTABLE_FIELDS: &'static [&'static str] =
        &["id", "name", "created_at", "updated_at"];

    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the update timestamp after a mutation
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Listable for Author {
    fn listing_id(&self) -> Uuid {
        self.id
    }

    fn listing_created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn field_cmp(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "created_at" => self.created_at.cmp(&other.created_at),
            "updated_at" => self.updated_at.cmp(&other.updated_at),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Validated input for creating an author
#[derive(Debug)]
pub struct CreateAuthorInput {
    pub name: String,
}

impl CreateAuthorInput {
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let mut payload = Payload::new(body);
        let name = payload.required_string("name");
        payload.finish()?;
        Ok(Self {
            name: name.unwrap_or_default(),
        })
    }
}

/// Validated input for a partial author update.
///
/// Only supplied fields change; unknown fields are ignored.
#[derive(Debug)]
pub struct UpdateAuthorInput {
    pub name: Option<String>,
}

impl UpdateAuthorInput {
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let mut payload = Payload::new(body);
        let name = payload.optional_string("name");
        payload.finish()?;
        Ok(Self { name })
    }

    pub fn apply(self, author: &mut Author) {
        if let Some(name) = self.name {
            author.name = name;
        }
        author.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_author_assigns_id_and_timestamps() {
        let author = Author::new("John Doe".to_string());
        assert_eq!(author.name, "John Doe");
        assert_eq!(author.created_at, author.updated_at);
    }

    #[test]
    fn test_create_input_requires_name() {
        assert!(CreateAuthorInput::from_json(&json!({})).is_err());
        assert!(CreateAuthorInput::from_json(&json!({"name": ""})).is_err());
        assert!(CreateAuthorInput::from_json(&json!({"name": 7})).is_err());

        let input = CreateAuthorInput::from_json(&json!({"name": "Jane Doe"})).unwrap();
        assert_eq!(input.name, "Jane Doe");
    }

    #[test]
    fn test_update_input_is_partial() {
        let input = UpdateAuthorInput::from_json(&json!({})).unwrap();
        assert!(input.name.is_none());

        let mut author = Author::new("June Doe".to_string());
        let before = author.updated_at;
        input.apply(&mut author);
        assert_eq!(author.name, "June Doe");
        assert!(author.updated_at >= before);
    }

    #[test]
    fn test_update_input_replaces_name() {
        let mut author = Author::new("Old Name".to_string());
        let input = UpdateAuthorInput::from_json(&json!({"name": "New Name"})).unwrap();
        input.apply(&mut author);
        assert_eq!(author.name, "New Name");
    }

    #[test]
    fn test_update_input_rejects_invalid_name() {
        assert!(UpdateAuthorInput::from_json(&json!({"name": 12})).is_err());
        assert!(UpdateAuthorInput::from_json(&json!({"name": ""})).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let input =
            UpdateAuthorInput::from_json(&json!({"name": "A", "publisher": "ignored"})).unwrap();
        assert_eq!(input.name.as_deref(), Some("A"));
    }
}
