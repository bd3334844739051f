//! HTTP middleware for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added by the binary)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (reuse or generate `x-request-id`)
//! 4. Panic catcher (turn handler panics into a JSON 500)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
