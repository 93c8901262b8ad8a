//! Account user name.

use crate::constants::{MAX_USER_NAME_LENGTH, MIN_USER_NAME_LENGTH};
use crate::error::{Field, ValidationError};

use super::check_length;

string_value_object!(
    /// Login name: ASCII letters and digits only.
    UserName
);

impl UserName {
    /// Length is checked before the character class.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_length(
            &value,
            Field::UserName,
            MIN_USER_NAME_LENGTH,
            MAX_USER_NAME_LENGTH,
        )?;
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidCharacter {
                field: Field::UserName,
            });
        }
        Ok(Self(value))
    }
}
