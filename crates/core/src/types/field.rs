//! Request body fields.
//!
//! JSON bodies arrive untyped, so every textual field is classified before use:
//! it is either absent, a non-empty string, or something else. Presence is
//! tracked explicitly; an absent field and an empty string are never confused.

use serde_json::{Map, Value};

/// Errors that can occur when reading a textual field.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was not provided.
    #[error("field is required")]
    Missing,
    /// The field is present but is not a non-empty string.
    #[error("field must be a non-empty string")]
    NotText,
}

/// Returns `true` if the value is a non-empty string.
///
/// ```
/// use serde_json::json;
/// use user_homes_core::is_text;
///
/// assert!(is_text(&json!("Madrid")));
/// assert!(!is_text(&json!("")));
/// assert!(!is_text(&json!(12)));
/// assert!(!is_text(&json!(null)));
/// ```
#[must_use]
pub fn is_text(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

/// A textual field read from a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextField {
    /// The key is not present in the object.
    Absent,
    /// The key holds a non-empty string.
    Text(String),
    /// The key holds anything else (`null`, a number, an empty string, ...).
    Invalid,
}

impl TextField {
    /// Classify an optional JSON value.
    #[must_use]
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::String(s)) if !s.is_empty() => Self::Text(s.clone()),
            Some(_) => Self::Invalid,
        }
    }

    /// Read `key` from a JSON object.
    #[must_use]
    pub fn read(object: &Map<String, Value>, key: &str) -> Self {
        Self::from_json(object.get(key))
    }

    /// Require the field to be present and textual.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Missing` if absent, `FieldError::NotText` if invalid.
    pub fn required(self) -> Result<String, FieldError> {
        match self {
            Self::Text(s) => Ok(s),
            Self::Absent => Err(FieldError::Missing),
            Self::Invalid => Err(FieldError::NotText),
        }
    }

    /// Accept an absent field, but reject one that is present and not textual.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotText` if the field is present with an invalid value.
    pub fn optional(self) -> Result<Option<String>, FieldError> {
        match self {
            Self::Text(s) => Ok(Some(s)),
            Self::Absent => Ok(None),
            Self::Invalid => Err(FieldError::NotText),
        }
    }
}
