//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                   - Health check
//! GET  /api-docs                                 - OpenAPI document
//!
//! # Users
//! GET    /api/users                              - List users
//! POST   /api/users                              - Create user
//! GET    /api/users/{user_id}                    - Get user
//! PATCH  /api/users/{user_id}                    - Update user
//! PUT    /api/users/{user_id}                    - Replace user
//! DELETE /api/users/{user_id}                    - Delete user
//!
//! # Homes
//! GET    /api/users/{user_id}/homes              - List user homes (?street&city&country)
//! POST   /api/users/{user_id}/homes              - Create user home
//! PATCH  /api/users/{user_id}/homes/{home_id}    - Update user home
//! PUT    /api/users/{user_id}/homes/{home_id}    - Replace user home
//! DELETE /api/users/{user_id}/homes/{home_id}    - Delete user home
//! ```
//!
//! Anything else answers 501.

pub mod docs;
pub mod homes;
pub mod users;

use axum::{
    Json, Router,
    routing::{get, patch},
};
use serde_json::{Value, json};

use crate::state::AppState;

/// Body of every successful mutation.
pub(crate) fn empty_body() -> Json<Value> {
    Json(json!({}))
}

/// Create the user and home routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{user_id}",
            get(users::get_user)
                .patch(users::patch_user)
                .put(users::put_user)
                .delete(users::delete_user),
        )
        .route(
            "/api/users/{user_id}/homes",
            get(homes::list_user_homes).post(homes::create_user_home),
        )
        .route(
            "/api/users/{user_id}/homes/{home_id}",
            patch(homes::patch_user_home)
                .put(homes::put_user_home)
                .delete(homes::delete_user_home),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs", get(docs::api_docs))
        .merge(user_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
