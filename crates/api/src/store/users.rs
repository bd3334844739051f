//! User operations.

use user_homes_core::UserId;

use super::{Store, StoreError};
use crate::models::{NewUser, User, UserPatch};

impl Store {
    /// List every user in insertion order.
    pub async fn list_users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if no such user exists.
    pub async fn get_user(&self, id: UserId) -> Result<User, StoreError> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(StoreError::UserNotFound)
    }

    /// Returns `true` if a user with this ID exists.
    pub async fn user_exists(&self, id: UserId) -> bool {
        self.inner.read().await.users.iter().any(|user| user.id == id)
    }

    /// Append a new user with the next ID.
    pub async fn create_user(&self, new: NewUser) -> User {
        let mut collections = self.inner.write().await;

        let id = UserId::new(collections.next_user_id);
        collections.next_user_id += 1;

        let user = User::new(id, new.name, new.surname);
        collections.users.push(user.clone());
        user
    }

    /// Replace the provided fields of a user, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if no such user exists.
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        let mut collections = self.inner.write().await;

        let slot = collections
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(StoreError::UserNotFound)?;

        *slot = patch.apply(slot);
        Ok(slot.clone())
    }

    /// Remove a user that owns no homes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if no such user exists, and
    /// `StoreError::UserHasHomes` if any home still references it.
    pub async fn delete_user(&self, id: UserId) -> Result<User, StoreError> {
        let mut collections = self.inner.write().await;

        let index = collections
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(StoreError::UserNotFound)?;

        if collections.homes.iter().any(|home| home.is_owned_by(id)) {
            return Err(StoreError::UserHasHomes);
        }

        Ok(collections.users.remove(index))
    }
}
