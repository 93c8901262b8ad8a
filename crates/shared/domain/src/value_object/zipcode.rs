//! Postal code.

use crate::constants::ZIPCODE_LENGTH;
use crate::error::{Field, ValidationError};

string_value_object!(
    /// Postal code: exactly [`ZIPCODE_LENGTH`] ASCII digits, no separator.
    Zipcode
);

impl Zipcode {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.chars().count() != ZIPCODE_LENGTH {
            return Err(ValidationError::Length {
                field: Field::Zipcode,
                expected: ZIPCODE_LENGTH,
            });
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NotNumeric {
                field: Field::Zipcode,
            });
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zipcode_wrong_length() {
        let expected = ValidationError::Length {
            field: Field::Zipcode,
            expected: ZIPCODE_LENGTH,
        };
        assert_eq!(Zipcode::new("1".repeat(ZIPCODE_LENGTH + 1)), Err(expected.clone()));
        assert_eq!(Zipcode::new("1".repeat(ZIPCODE_LENGTH - 1)), Err(expected));
    }

    #[test]
    fn test_zipcode_not_numeric() {
        assert_eq!(
            Zipcode::new("a".repeat(ZIPCODE_LENGTH)),
            Err(ValidationError::NotNumeric {
                field: Field::Zipcode
            })
        );
        // separators are rejected, not stripped
        assert!(Zipcode::new("2397-000").is_err());
    }

    #[test]
    fn test_length_checked_before_digits() {
        assert!(matches!(
            Zipcode::new("abc"),
            Err(ValidationError::Length { .. })
        ));
    }

    #[test]
    fn test_valid_zipcode() {
        let zipcode = Zipcode::new("23970000").unwrap();
        assert!(zipcode == "23970000");
    }
}
