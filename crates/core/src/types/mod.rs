//! Core types for User Homes.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod field;
pub mod id;

pub use field::{FieldError, TextField, is_text};
pub use id::*;
