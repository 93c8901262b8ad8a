//! Numeric identities.

use std::fmt;

use serde::Serialize;

use crate::error::{Field, ValidationError};

use super::ValueObject;

macro_rules! positive_id {
    ($(#[$meta:meta])* $name:ident, $field:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Fails with `InvalidId` when `value <= 0`.
            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::InvalidId { field: $field });
                }
                Ok(Self(value))
            }

            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl ValueObject for $name {
            type Value = i64;

            fn value(&self) -> &i64 {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl PartialEq<i64> for $name {
            fn eq(&self, other: &i64) -> bool {
                self.0 == *other
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

positive_id!(
    /// Identity of a stored address.
    AddressId,
    Field::AddressId
);

positive_id!(
    /// Identity of a registered user.
    UserId,
    Field::UserId
);
