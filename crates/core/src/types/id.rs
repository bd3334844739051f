//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. A user ID and a home
//! ID are assigned independently, so the same number can name both.

/// Errors that can occur when parsing an ID from a path segment.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    /// The input is not an integer (or does not fit in 64 bits).
    #[error("must be an integer")]
    NotAnInteger,
    /// The input is an integer below zero.
    #[error("must not be negative")]
    Negative,
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_i64()`, `parse()`
/// - `From<i64>` and `Into<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use user_homes_core::define_id;
/// define_id!(UserId);
/// define_id!(HomeId);
///
/// let user_id = UserId::new(1);
/// let home_id = HomeId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: UserId = home_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }

            /// Parse a non-negative ID from its decimal text form.
            ///
            /// # Errors
            ///
            /// Returns [`IdError::NotAnInteger`] if the input is not an integer,
            /// and [`IdError::Negative`] if it is below zero.
            ///
            /// [`IdError::NotAnInteger`]: $crate::types::id::IdError::NotAnInteger
            /// [`IdError::Negative`]: $crate::types::id::IdError::Negative
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::types::id::IdError> {
                let id = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| $crate::types::id::IdError::NotAnInteger)?;
                if id < 0 {
                    return Err($crate::types::id::IdError::Negative);
                }
                Ok(Self(id))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(HomeId);
