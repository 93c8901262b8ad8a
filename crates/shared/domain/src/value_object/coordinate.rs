//! Geographic coordinates kept in their decimal string form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Field, ValidationError};

// -90..=90, optional sign and fractional part
static LATITUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?([1-8]?[0-9](\.[0-9]+)?|90(\.0+)?)$")
        .unwrap_or_else(|error| panic!("latitude regex failed to compile: {error}"))
});

// -180..=180, optional sign and fractional part
static LONGITUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(180(\.0+)?|((1[0-7][0-9])|([1-9]?[0-9]))(\.[0-9]+)?)$")
        .unwrap_or_else(|error| panic!("longitude regex failed to compile: {error}"))
});

string_value_object!(
    /// Latitude such as `-23.307577`.
    Latitude
);

impl Latitude {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !LATITUDE_RE.is_match(&value) {
            return Err(ValidationError::InvalidFormat {
                field: Field::Latitude,
            });
        }
        Ok(Self(value))
    }
}

string_value_object!(
    /// Longitude such as `-44.754146`.
    Longitude
);

impl Longitude {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !LONGITUDE_RE.is_match(&value) {
            return Err(ValidationError::InvalidFormat {
                field: Field::Longitude,
            });
        }
        Ok(Self(value))
    }
}
