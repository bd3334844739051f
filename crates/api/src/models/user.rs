//! User domain types.

use serde::{Deserialize, Serialize};

use user_homes_core::UserId;

/// A person who may own homes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Given name.
    pub name: Option<String>,
    /// Family name.
    pub surname: Option<String>,
}

impl User {
    /// Build a user with both names set.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            surname: Some(surname.into()),
        }
    }
}

/// Fields for a user that does not have an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
}

/// A partial update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
}

impl UserPatch {
    /// Return a copy of `user` with the provided fields replaced.
    #[must_use]
    pub fn apply(self, user: &User) -> User {
        User {
            id: user.id,
            name: self.name.or_else(|| user.name.clone()),
            surname: self.surname.or_else(|| user.surname.clone()),
        }
    }
}
