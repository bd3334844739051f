//! Integration tests for the User Homes API.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p user-homes-integration-tests
//! ```
//!
//! Each test starts its own server on an ephemeral port with a freshly seeded
//! store, so tests never observe each other's writes.
//!
//! # Test Categories
//!
//! - `users` - User CRUD and referential integrity
//! - `homes` - Nested home CRUD and filtering
//! - `service` - Fallbacks, documentation, headers

use std::net::{Ipv4Addr, SocketAddr};

use axum::ServiceExt;
use axum::extract::Request;
use reqwest::{Client, Method, Response};
use serde_json::Value;

use user_homes_api::config::ApiConfig;
use user_homes_api::state::AppState;
use user_homes_api::store::Store;

/// A running API server and a client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a server with the sample records.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn seeded() -> Self {
        Self::with_store(Store::seeded()).await
    }

    /// Start a server over the given store.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn with_store(store: Store) -> Self {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let base_url = format!("http://{addr}");

        let config = ApiConfig::from_lookup(|key| match key {
            "API_HOST" => Some(addr.ip().to_string()),
            "PORT" => Some(addr.port().to_string()),
            "API_BASE_URL" => Some(base_url.clone()),
            _ => None,
        })
        .expect("Test configuration is valid");

        let app = user_homes_api::normalize_paths(user_homes_api::app(AppState::new(
            config, store,
        )));

        tokio::spawn(async move {
            axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
                .await
                .expect("Test server error");
        });

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Absolute URL for a path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request with an optional JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Response {
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.expect("Failed to send request")
    }

    /// Send a request and decode the JSON response body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> (reqwest::StatusCode, Value) {
        let response = self.send(method, path, body).await;
        let status = response.status();
        let value = response.json().await.expect("Response body is not JSON");
        (status, value)
    }
}
