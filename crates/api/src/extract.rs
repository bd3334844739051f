//! Request parsing for the user and home endpoints.
//!
//! Inputs are checked in a fixed order so that error precedence is stable:
//!
//! 1. every path ID is an integer (user first, then home)
//! 2. every path ID is non-negative (user first, then home)
//! 3. body fields have the right type
//!
//! Path segments are therefore captured as raw strings and only interpreted
//! here, and the body is decoded after the IDs have been accepted.
//!
//! Only bodies declared as `application/json` are read. Any other body is
//! treated as having no fields, and a body too large to buffer is a 500.

use axum::{
    body::Bytes,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{BytesRejection, PathRejection},
    },
    http::{HeaderMap, header},
};
use serde::Deserialize;
use serde_json::{Map, Value};

use user_homes_core::{HomeId, IdError, TextField, UserId};

use crate::error::AppError;

/// Message for any body that cannot be read or has a badly typed field.
pub const INVALID_BODY_MESSAGE: &str = "Invalid body parameters";

/// Message for a query string that cannot be decoded.
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query parameters";

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(format!("Invalid path parameters: {}", rejection.body_text()))
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Internal(format!("Unreadable request body: {}", rejection.body_text()))
    }
}

/// Path of `/api/users/{user_id}` and its sub-resources.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct UserPath {
    user_id: String,
}

impl UserPath {
    /// Parse the user ID.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the ID is not a non-negative integer.
    pub fn user_id(&self) -> Result<UserId, AppError> {
        UserId::parse(&self.user_id).map_err(|err| invalid_id("user", err))
    }
}

/// Path of `/api/users/{user_id}/homes/{home_id}`.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct HomePath {
    user_id: String,
    home_id: String,
}

impl HomePath {
    /// Parse both IDs.
    ///
    /// An ID that is not an integer takes precedence over one that is negative.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if either ID is not a non-negative integer.
    pub fn ids(&self) -> Result<(UserId, HomeId), AppError> {
        match (UserId::parse(&self.user_id), HomeId::parse(&self.home_id)) {
            (Ok(user_id), Ok(home_id)) => Ok((user_id, home_id)),
            (Err(err @ IdError::NotAnInteger), _) => Err(invalid_id("user", err)),
            (_, Err(err @ IdError::NotAnInteger)) => Err(invalid_id("home", err)),
            (Err(err), _) => Err(invalid_id("user", err)),
            (_, Err(err)) => Err(invalid_id("home", err)),
        }
    }
}

fn invalid_id(entity: &str, err: IdError) -> AppError {
    let rule = match err {
        IdError::NotAnInteger => "Must be an integer.",
        IdError::Negative => "Must be greater than 0.",
    };
    AppError::Validation(format!("Invalid {entity} id. {rule}"))
}

/// Raw bytes of a JSON request body, not yet decoded.
///
/// Empty when the request does not declare `Content-Type: application/json`.
#[derive(Debug, Default)]
pub struct JsonPayload(Bytes);

impl JsonPayload {
    /// Decode the payload.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the bytes are not valid JSON.
    pub fn parse(&self) -> Result<JsonBody, AppError> {
        JsonBody::parse(&self.0)
    }
}

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(request.headers()) {
            return Ok(Self::default());
        }

        let bytes = Bytes::from_request(request, state).await?;
        Ok(Self(bytes))
    }
}

/// True for `application/json`, with or without parameters such as `charset`.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// A decoded JSON request body.
///
/// An empty body is read as `{}`. A JSON value that is not an object has no fields.
#[derive(Debug, Default)]
pub struct JsonBody {
    fields: Map<String, Value>,
}

impl JsonBody {
    /// Decode raw body bytes.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the bytes are not valid JSON.
    pub fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(bytes).map_err(|err| {
            tracing::debug!(error = %err, "Malformed JSON body");
            AppError::Validation(INVALID_BODY_MESSAGE.to_string())
        })?;

        Ok(match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        })
    }

    /// Read a field that must be a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the field is absent or not a non-empty string.
    pub fn required(&self, key: &str) -> Result<String, AppError> {
        TextField::read(&self.fields, key)
            .required()
            .map_err(|_| invalid_body())
    }

    /// Read a field that may be absent but, if present, must be a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the field is present and not a non-empty string.
    pub fn optional(&self, key: &str) -> Result<Option<String>, AppError> {
        TextField::read(&self.fields, key)
            .optional()
            .map_err(|_| invalid_body())
    }
}

fn invalid_body() -> AppError {
    AppError::Validation(INVALID_BODY_MESSAGE.to_string())
}
