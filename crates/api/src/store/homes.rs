//! Home operations.
//!
//! Homes are always addressed through their owner: a home ID that exists
//! under a different user is reported as not found.

use user_homes_core::{HomeId, UserId};

use super::{Store, StoreError};
use crate::models::{Home, HomeFilter, HomePatch, NewHome};

impl Store {
    /// List the homes of an existing user that match `filter`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if no such user exists.
    pub async fn list_user_homes(
        &self,
        user_id: UserId,
        filter: &HomeFilter,
    ) -> Result<Vec<Home>, StoreError> {
        let collections = self.inner.read().await;

        if !collections.users.iter().any(|user| user.id == user_id) {
            return Err(StoreError::UserNotFound);
        }

        Ok(collections
            .homes
            .iter()
            .filter(|home| home.is_owned_by(user_id) && filter.matches(home))
            .cloned()
            .collect())
    }

    /// Append a new home owned by `user_id`.
    ///
    /// The owner is not checked against the users collection.
    pub async fn create_home(&self, user_id: UserId, new: NewHome) -> Home {
        let mut collections = self.inner.write().await;

        let id = HomeId::new(collections.next_home_id);
        collections.next_home_id += 1;

        let home = Home::new(id, Some(user_id), new.street, new.city, new.country);
        collections.homes.push(home.clone());
        home
    }

    /// Replace the provided fields of a user's home, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::HomeNotFound` if the user has no such home.
    pub async fn update_home(
        &self,
        user_id: UserId,
        home_id: HomeId,
        patch: HomePatch,
    ) -> Result<Home, StoreError> {
        let mut collections = self.inner.write().await;

        let slot = collections
            .homes
            .iter_mut()
            .find(|home| home.id == home_id && home.is_owned_by(user_id))
            .ok_or(StoreError::HomeNotFound)?;

        *slot = patch.apply(slot);
        Ok(slot.clone())
    }

    /// Remove a user's home.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::HomeNotFound` if the user has no such home.
    pub async fn delete_home(&self, user_id: UserId, home_id: HomeId) -> Result<Home, StoreError> {
        let mut collections = self.inner.write().await;

        let index = collections
            .homes
            .iter()
            .position(|home| home.id == home_id && home.is_owned_by(user_id))
            .ok_or(StoreError::HomeNotFound)?;

        Ok(collections.homes.remove(index))
    }
}
