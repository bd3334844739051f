//! In-memory store for users and homes.
//!
//! # Collections
//!
//! - `users` - every [`User`], in insertion order
//! - `homes` - every [`Home`], in insertion order
//!
//! Lookups are linear scans. Updates replace a record at its current position
//! and deletes remove it, so listing order is always insertion order.
//!
//! All access goes through one `RwLock`, which serializes writers. There is no
//! durability: state lives for the lifetime of the process.
//!
//! New IDs come from per-collection counters that only move forward, so a
//! deleted ID is never handed out again.

mod homes;
pub mod seed;
mod users;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Home, User};

/// Errors that can occur during store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No user with the requested ID.
    #[error("User not found")]
    UserNotFound,

    /// No home with the requested ID under the requested user.
    #[error("Home not found")]
    HomeNotFound,

    /// The user still owns at least one home.
    #[error("User has remaining homes")]
    UserHasHomes,
}

/// The owned store shared by all handlers.
#[derive(Debug)]
pub struct Store {
    inner: RwLock<Collections>,
}

#[derive(Debug)]
struct Collections {
    users: Vec<User>,
    homes: Vec<Home>,
    next_user_id: i64,
    next_home_id: i64,
}

impl Store {
    /// Create a store holding the given records.
    ///
    /// ID counters start one past the largest ID present (or at 1).
    #[must_use]
    pub fn new(users: Vec<User>, homes: Vec<Home>) -> Self {
        let next_user_id = next_after(users.iter().map(|u| u.id.as_i64()));
        let next_home_id = next_after(homes.iter().map(|h| h.id.as_i64()));

        Self {
            inner: RwLock::new(Collections {
                users,
                homes,
                next_user_id,
                next_home_id,
            }),
        }
    }

    /// Create a store with no records.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Create a store loaded with the sample records.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::homes())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

fn next_after(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max.saturating_add(1))
}
