//! Domain models for the API.
//!
//! Both entities serialize to the JSON shapes returned by the endpoints.
//! Unset text fields serialize as `null`.

pub mod home;
pub mod user;

pub use home::{Home, HomeFilter, HomePatch, NewHome};
pub use user::{NewUser, User, UserPatch};
