//! Free-text address parts.

use crate::constants::{
    MAX_ADDRESS_NUMBER_LENGTH, MAX_CITY_LENGTH, MAX_COMPLEMENT_LENGTH, MAX_DISTRICT_LENGTH,
    MAX_STATE_LENGTH, MAX_STREET_LENGTH, MIN_ADDRESS_NUMBER_LENGTH, MIN_CITY_LENGTH,
    MIN_DISTRICT_LENGTH, MIN_STATE_LENGTH, MIN_STREET_LENGTH,
};
use crate::error::{Field, ValidationError};

use super::check_length;

string_value_object!(
    /// Street name, between [`MIN_STREET_LENGTH`] and [`MAX_STREET_LENGTH`] characters.
    Street
);

impl Street {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_length(&value, Field::Street, MIN_STREET_LENGTH, MAX_STREET_LENGTH)?;
        Ok(Self(value))
    }
}

string_value_object!(
    /// Neighbourhood / district.
    District
);

impl District {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_length(&value, Field::District, MIN_DISTRICT_LENGTH, MAX_DISTRICT_LENGTH)?;
        Ok(Self(value))
    }
}

string_value_object!(City);

impl City {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_length(&value, Field::City, MIN_CITY_LENGTH, MAX_CITY_LENGTH)?;
        Ok(Self(value))
    }
}

string_value_object!(State);

impl State {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_length(&value, Field::State, MIN_STATE_LENGTH, MAX_STATE_LENGTH)?;
        Ok(Self(value))
    }
}

string_value_object!(
    /// Optional extra address line (apartment, block). Empty is allowed.
    Complement
);

impl Complement {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_length(&value, Field::Complement, 0, MAX_COMPLEMENT_LENGTH)?;
        Ok(Self(value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

string_value_object!(
    /// House number as written by the user ("12", "12A", "s/n").
    AddressNumber
);

impl AddressNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_length(
            &value,
            Field::AddressNumber,
            MIN_ADDRESS_NUMBER_LENGTH,
            MAX_ADDRESS_NUMBER_LENGTH,
        )?;
        Ok(Self(value))
    }
}
