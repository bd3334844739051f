//! Home handlers, nested under their owner.
//!
//! # Routes
//!
//! ```text
//! GET    /api/users/{user_id}/homes            - List the user's homes (filterable)
//! POST   /api/users/{user_id}/homes            - Create a home for the user
//! PATCH  /api/users/{user_id}/homes/{home_id}  - Update some home fields
//! PUT    /api/users/{user_id}/homes/{home_id}  - Replace home fields
//! DELETE /api/users/{user_id}/homes/{home_id}  - Delete home
//! ```

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;

use super::empty_body;
use crate::error::{AppError, Result};
use crate::extract::{HomePath, INVALID_QUERY_MESSAGE, JsonPayload, UserPath};
use crate::models::{Home, HomeFilter, HomePatch, NewHome};
use crate::state::AppState;
use crate::store::StoreError;

/// Not-found message for deleting a home the user does not own.
pub const USER_HOME_NOT_FOUND: &str = "User home not found";

/// List a user's homes, filtered by exact `street`, `city` and `country`.
///
/// # Errors
///
/// 400 for an invalid ID or query string, 404 if the user does not exist.
pub async fn list_user_homes(
    State(state): State<AppState>,
    path: UserPath,
    query: std::result::Result<Query<HomeFilter>, QueryRejection>,
) -> Result<Json<Vec<Home>>> {
    let user_id = path.user_id()?;
    let Query(filter) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable query string");
        AppError::Validation(INVALID_QUERY_MESSAGE.to_string())
    })?;

    let homes = state.store().list_user_homes(user_id, &filter).await?;
    Ok(Json(homes))
}

/// Create a home from `{ street, city, country }`.
///
/// The owner is taken from the path and is not checked against the users.
/// Responds `201 {}` with a `Location` header for the new home.
///
/// # Errors
///
/// 400 for an invalid ID or a missing field.
pub async fn create_user_home(
    State(state): State<AppState>,
    path: UserPath,
    payload: JsonPayload,
) -> Result<impl IntoResponse> {
    let user_id = path.user_id()?;
    let body = payload.parse()?;
    let new = NewHome {
        street: body.required("street")?,
        city: body.required("city")?,
        country: body.required("country")?,
    };

    let home = state.store().create_home(user_id, new).await;
    tracing::info!(%user_id, home_id = %home.id, "Home created");

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("/api/users/{user_id}/homes/{}", home.id),
        )],
        empty_body(),
    ))
}

/// Update the fields present in `{ street?, city?, country? }`.
///
/// # Errors
///
/// 400 for an invalid ID or a badly typed field, 404 if the user has no such home.
pub async fn patch_user_home(
    State(state): State<AppState>,
    path: HomePath,
    payload: JsonPayload,
) -> Result<Json<Value>> {
    let (user_id, home_id) = path.ids()?;
    let body = payload.parse()?;
    let patch = HomePatch {
        street: body.optional("street")?,
        city: body.optional("city")?,
        country: body.optional("country")?,
    };

    state.store().update_home(user_id, home_id, patch).await?;
    tracing::info!(%user_id, %home_id, "Home updated");

    Ok(empty_body())
}

/// Replace every field with `{ street, city, country }`.
///
/// # Errors
///
/// 400 for an invalid ID or a missing field, 404 if the user has no such home.
pub async fn put_user_home(
    State(state): State<AppState>,
    path: HomePath,
    payload: JsonPayload,
) -> Result<Json<Value>> {
    let (user_id, home_id) = path.ids()?;
    let body = payload.parse()?;
    let patch = HomePatch {
        street: Some(body.required("street")?),
        city: Some(body.required("city")?),
        country: Some(body.required("country")?),
    };

    state.store().update_home(user_id, home_id, patch).await?;
    tracing::info!(%user_id, %home_id, "Home replaced");

    Ok(empty_body())
}

/// Delete a user's home.
///
/// # Errors
///
/// 400 for an invalid ID, 404 `"User home not found"` if the user has no such home.
pub async fn delete_user_home(
    State(state): State<AppState>,
    path: HomePath,
) -> Result<Json<Value>> {
    let (user_id, home_id) = path.ids()?;

    state
        .store()
        .delete_home(user_id, home_id)
        .await
        .map_err(|err| match err {
            StoreError::HomeNotFound => AppError::NotFound(USER_HOME_NOT_FOUND.to_string()),
            other => other.into(),
        })?;
    tracing::info!(%user_id, %home_id, "Home deleted");

    Ok(empty_body())
}
