//! Value objects - validated, immutable wrappers around primitives.
//!
//! A value object can only be obtained through its fallible constructor, so
//! holding one means its invariant holds. Two value objects are equal when
//! their underlying primitives are equal.

use std::fmt;

use crate::error::{Field, ValidationError};

/// Common surface of every value object.
pub trait ValueObject: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Underlying primitive type
    type Value: ?Sized + PartialEq;

    /// Borrow the underlying primitive
    fn value(&self) -> &Self::Value;

    /// Compare by underlying primitive
    fn equals(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

/// Declares a string-backed value object.
///
/// The type must provide `fn new(value: impl Into<String>) -> Result<Self, ValidationError>`;
/// everything else (accessors, `Display`, comparisons against raw strings,
/// `TryFrom<String>`, transparent serialization) is generated here.
macro_rules! string_value_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Borrow the validated string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $crate::value_object::ValueObject for $name {
            type Value = str;

            fn value(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

mod address;
mod coordinate;
mod id;
mod user_name;
mod zipcode;

pub use address::{AddressNumber, City, Complement, District, State, Street};
pub use coordinate::{Latitude, Longitude};
pub use id::{AddressId, UserId};
pub use user_name::UserName;
pub use zipcode::Zipcode;

/// Check `min <= chars(value) <= max`, reporting the bound that was crossed.
pub(crate) fn check_length(
    value: &str,
    field: Field,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length < min {
        return Err(ValidationError::MinLength { field, min });
    }
    if length > max {
        return Err(ValidationError::MaxLength { field, max });
    }
    Ok(())
}
