//! User handlers.
//!
//! # Routes
//!
//! ```text
//! GET    /api/users            - List users
//! POST   /api/users            - Create user
//! GET    /api/users/{user_id}  - Get user
//! PATCH  /api/users/{user_id}  - Update some user fields
//! PUT    /api/users/{user_id}  - Replace user fields
//! DELETE /api/users/{user_id}  - Delete user (only without homes)
//! ```

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;

use super::empty_body;
use crate::error::Result;
use crate::extract::{JsonPayload, UserPath};
use crate::models::{NewUser, User, UserPatch};
use crate::state::AppState;

/// List every user.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store().list_users().await)
}

/// Get one user.
///
/// # Errors
///
/// 400 for an invalid ID, 404 if the user does not exist.
pub async fn get_user(State(state): State<AppState>, path: UserPath) -> Result<Json<User>> {
    let user_id = path.user_id()?;
    let user = state.store().get_user(user_id).await?;
    Ok(Json(user))
}

/// Create a user from `{ name, surname }`.
///
/// Responds `201 {}` with a `Location` header for the new user.
///
/// # Errors
///
/// 400 if either field is missing or not a non-empty string.
pub async fn create_user(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<impl IntoResponse> {
    let body = payload.parse()?;
    let name = body.required("name")?;
    let surname = body.required("surname")?;

    let user = state.store().create_user(NewUser { name, surname }).await;
    tracing::info!(user_id = %user.id, "User created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/users/{}", user.id))],
        empty_body(),
    ))
}

/// Update the fields present in `{ name?, surname? }`.
///
/// # Errors
///
/// 400 for an invalid ID or a badly typed field, 404 if the user does not exist.
pub async fn patch_user(
    State(state): State<AppState>,
    path: UserPath,
    payload: JsonPayload,
) -> Result<Json<Value>> {
    let user_id = path.user_id()?;
    let body = payload.parse()?;
    let patch = UserPatch {
        name: body.optional("name")?,
        surname: body.optional("surname")?,
    };

    state.store().update_user(user_id, patch).await?;
    tracing::info!(%user_id, "User updated");

    Ok(empty_body())
}

/// Replace both fields with `{ name, surname }`.
///
/// # Errors
///
/// 400 for an invalid ID or a missing field, 404 if the user does not exist.
pub async fn put_user(
    State(state): State<AppState>,
    path: UserPath,
    payload: JsonPayload,
) -> Result<Json<Value>> {
    let user_id = path.user_id()?;
    let body = payload.parse()?;
    let patch = UserPatch {
        name: Some(body.required("name")?),
        surname: Some(body.required("surname")?),
    };

    state.store().update_user(user_id, patch).await?;
    tracing::info!(%user_id, "User replaced");

    Ok(empty_body())
}

/// Delete a user.
///
/// # Errors
///
/// 400 for an invalid ID, 404 if the user does not exist, 409 if the user
/// still owns homes.
pub async fn delete_user(State(state): State<AppState>, path: UserPath) -> Result<Json<Value>> {
    let user_id = path.user_id()?;

    state.store().delete_user(user_id).await?;
    tracing::info!(%user_id, "User deleted");

    Ok(empty_body())
}
