//! The `Book` entity and its create/update inputs
//!
//! `publication_year` is deliberately a string: the API contract rejects a
//! numeric JSON value for it with a 422.

use crate::core::error::ApiError;
use crate::core::query::Listable;
use crate::core::validation::Payload;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use uuid::Uuid;

/// A persisted book record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub publication_year: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Fields a listing may sort on
    pub const SORTABLE_FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "publication_year",
        "created_at",
        "updated_at",
    ];

    pub fn new(title: String, description: String, publication_year: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            publication_year,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the update timestamp after a mutation
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Listable for Book {
    fn listing_id(&self) -> Uuid {
        self.id
    }

    fn listing_created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn field_cmp(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => self.title.cmp(&other.title),
            "description" => self.description.cmp(&other.description),
            "publication_year" => self.publication_year.cmp(&other.publication_year),
            "created_at" => self.created_at.cmp(&other.created_at),
            "updated_at" => self.updated_at.cmp(&other.updated_at),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Validated input for creating a book
#[derive(Debug)]
pub struct CreateBookInput {
    pub title: String,
    pub description: String,
    pub publication_year: String,
}

impl CreateBookInput {
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let mut payload = Payload::new(body);
        let title = payload.required_string("title");
        let description = payload.required_string("description");
        let publication_year = payload.required_string("publication_year");
        payload.finish()?;
        Ok(Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            publication_year: publication_year.unwrap_or_default(),
        })
    }
}

/// Validated input for a partial book update.
///
/// Only supplied fields change; unknown fields are ignored. Supplied
/// fields obey the same rules as create.
#[derive(Debug)]
pub struct UpdateBookInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub publication_year: Option<String>,
}

impl UpdateBookInput {
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let mut payload = Payload::new(body);
        let title = payload.optional_string("title");
        let description = payload.optional_string("description");
        let publication_year = payload.optional_string("publication_year");
        payload.finish()?;
        Ok(Self {
            title,
            description,
            publication_year,
        })
    }

    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(description) = self.description {
            book.description = description;
        }
        if let Some(publication_year) = self.publication_year {
            book.publication_year = publication_year;
        }
        book.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "title": "Ways of Seeing",
            "description": "Essays on how we look at art",
            "publication_year": "1972",
        })
    }

    #[test]
    fn test_create_input_accepts_valid_body() {
        let input = CreateBookInput::from_json(&valid_body()).unwrap();
        assert_eq!(input.title, "Ways of Seeing");
        assert_eq!(input.publication_year, "1972");
    }

    #[test]
    fn test_create_input_requires_all_fields() {
        let err = CreateBookInput::from_json(&json!({})).unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                assert!(errors.contains_key("title"));
                assert!(errors.contains_key("description"));
                assert!(errors.contains_key("publication_year"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_input_rejects_numeric_publication_year() {
        let mut body = valid_body();
        body["publication_year"] = json!(1972);
        let err = CreateBookInput::from_json(&body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The publication_year field must be a string."
        );
    }

    #[test]
    fn test_update_input_partial_apply() {
        let mut book = Book::new(
            "Old".to_string(),
            "Desc".to_string(),
            "1980".to_string(),
        );
        let input =
            UpdateBookInput::from_json(&json!({"description": "Revised"})).unwrap();
        input.apply(&mut book);
        assert_eq!(book.title, "Old");
        assert_eq!(book.description, "Revised");
        assert_eq!(book.publication_year, "1980");
    }

    #[test]
    fn test_update_input_rejects_numeric_year() {
        assert!(UpdateBookInput::from_json(&json!({"publication_year": 1980})).is_err());
    }

    #[test]
    fn test_new_book_assigns_id_and_timestamps() {
        let book = Book::new("T".to_string(), "D".to_string(), "2001".to_string());
        assert_eq!(book.created_at, book.updated_at);
        assert!(!book.id.is_nil());
    }
}
