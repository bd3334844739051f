//! User Homes Core - Shared types library.
//!
//! This crate provides the types shared by the API binary and its tests:
//! - `api` - REST service over the in-memory user and home collections
//! - `integration-tests` - Black-box HTTP tests against a running service
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and request-field validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
