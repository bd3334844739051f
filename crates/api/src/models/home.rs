//! Home domain types.

use serde::{Deserialize, Serialize};

use user_homes_core::{HomeId, UserId};

/// An address, optionally owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    /// Unique home ID.
    pub id: HomeId,
    /// Owner. `None` means the home is unowned. Not checked against the users.
    pub user_id: Option<UserId>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Home {
    /// Build a home with every address field set.
    #[must_use]
    pub fn new(
        id: HomeId,
        user_id: Option<UserId>,
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            street: Some(street.into()),
            city: Some(city.into()),
            country: Some(country.into()),
        }
    }

    /// Returns `true` if this home belongs to `user_id`.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == Some(user_id)
    }
}

/// Fields for a home that does not have an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHome {
    pub street: String,
    pub city: String,
    pub country: String,
}

/// A partial update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomePatch {
    pub street: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl HomePatch {
    /// Return a copy of `home` with the provided fields replaced.
    #[must_use]
    pub fn apply(self, home: &Home) -> Home {
        Home {
            id: home.id,
            user_id: home.user_id,
            street: self.street.or_else(|| home.street.clone()),
            city: self.city.or_else(|| home.city.clone()),
            country: self.country.or_else(|| home.country.clone()),
        }
    }
}

/// Exact-match filter over a user's homes, read from the query string.
///
/// Comparison is case-sensitive. An unset field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HomeFilter {
    pub street: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl HomeFilter {
    /// Returns `true` if `home` satisfies every provided field.
    #[must_use]
    pub fn matches(&self, home: &Home) -> bool {
        field_matches(self.street.as_deref(), home.street.as_deref())
            && field_matches(self.city.as_deref(), home.city.as_deref())
            && field_matches(self.country.as_deref(), home.country.as_deref())
    }
}

fn field_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    wanted.is_none_or(|wanted| actual == Some(wanted))
}
