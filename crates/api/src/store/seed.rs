//! Sample records loaded at startup.

use user_homes_core::{HomeId, UserId};

use crate::models::{Home, User};

/// The sample users.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User::new(UserId::new(1), "Juan", "Martín"),
        User::new(UserId::new(2), "María", "López"),
        User::new(UserId::new(3), "Paco", "Fernández"),
    ]
}

/// The sample homes. User 1 owns none and home 3 has no owner.
#[must_use]
pub fn homes() -> Vec<Home> {
    vec![
        Home::new(HomeId::new(1), Some(UserId::new(2)), "Calle A", "Ciudad A", "Pais A"),
        Home::new(HomeId::new(2), Some(UserId::new(3)), "Calle B", "Ciudad B", "Pais B"),
        Home::new(HomeId::new(3), None, "Calle C", "Ciudad C", "Pais C"),
        Home::new(HomeId::new(4), Some(UserId::new(2)), "Calle D", "Ciudad D", "Pais D"),
    ]
}
