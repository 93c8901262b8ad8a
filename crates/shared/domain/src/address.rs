//! Address entities.
//!
//! Decoding is split in two phases: `serde_json` fills a plain input record
//! ([`AddressInput`], [`RegisteredAddressInput`]) and the entity constructor
//! validates it. Decode failures are
//! [`DomainError::Malformed`](crate::DomainError::Malformed) for broken JSON and
//! [`DomainError::InvalidPayload`](crate::DomainError::InvalidPayload) for a
//! wrong-typed field. A decoded payload with a bad value is a
//! [`DomainError::Validation`](crate::DomainError::Validation).

use serde::{Deserialize, Serialize};

use crate::error::{DomainResult, ValidationError};
use crate::value_object::{
    AddressId, AddressNumber, City, Complement, District, Latitude, Longitude, State, Street,
    Zipcode,
};

/// Raw address fields as received on the wire.
///
/// Missing fields decode as empty strings so they fail validation instead of decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AddressInput {
    pub street: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub complement: String,
    pub number: String,
    pub zipcode: String,
    pub latitude: String,
    pub longitude: String,
}

/// Validated postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    street: Street,
    district: District,
    city: City,
    state: State,
    complement: Complement,
    number: AddressNumber,
    zipcode: Zipcode,
    latitude: Latitude,
    longitude: Longitude,
}

impl Address {
    /// Validate every field, in declaration order, stopping at the first failure.
    pub fn new(input: AddressInput) -> Result<Self, ValidationError> {
        Ok(Self {
            street: Street::new(input.street)?,
            district: District::new(input.district)?,
            city: City::new(input.city)?,
            state: State::new(input.state)?,
            complement: Complement::new(input.complement)?,
            number: AddressNumber::new(input.number)?,
            zipcode: Zipcode::new(input.zipcode)?,
            latitude: Latitude::new(input.latitude)?,
            longitude: Longitude::new(input.longitude)?,
        })
    }

    /// Decode and validate a JSON object with `Street`, `District`, ... keys.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let input: AddressInput = serde_json::from_str(json)?;
        Ok(Self::new(input)?)
    }

    pub fn street(&self) -> &Street {
        &self.street
    }

    pub fn district(&self) -> &District {
        &self.district
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn complement(&self) -> &Complement {
        &self.complement
    }

    pub fn number(&self) -> &AddressNumber {
        &self.number
    }

    pub fn zipcode(&self) -> &Zipcode {
        &self.zipcode
    }

    pub fn latitude(&self) -> &Latitude {
        &self.latitude
    }

    pub fn longitude(&self) -> &Longitude {
        &self.longitude
    }
}

impl TryFrom<AddressInput> for Address {
    type Error = ValidationError;

    fn try_from(input: AddressInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl From<Address> for AddressInput {
    fn from(address: Address) -> Self {
        Self {
            street: address.street.into(),
            district: address.district.into(),
            city: address.city.into(),
            state: address.state.into(),
            complement: address.complement.into(),
            number: address.number.into(),
            zipcode: address.zipcode.into(),
            latitude: address.latitude.into(),
            longitude: address.longitude.into(),
        }
    }
}

/// Raw registered address: `id` plus the address keys at the same level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredAddressInput {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    pub address: AddressInput,
}

/// Address that has been stored and carries an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredAddress {
    id: AddressId,
    #[serde(flatten)]
    address: Address,
}

impl RegisteredAddress {
    /// Validate the id first, then the address fields.
    ///
    /// A non-positive id is reported even when other fields are also invalid.
    pub fn new(input: RegisteredAddressInput) -> Result<Self, ValidationError> {
        let id = AddressId::new(input.id)?;
        let address = Address::new(input.address)?;
        Ok(Self { id, address })
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        let input: RegisteredAddressInput = serde_json::from_str(json)?;
        Ok(Self::new(input)?)
    }

    pub fn id(&self) -> AddressId {
        self.id
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl std::ops::Deref for RegisteredAddress {
    type Target = Address;

    fn deref(&self) -> &Address {
        &self.address
    }
}

impl TryFrom<RegisteredAddressInput> for RegisteredAddress {
    type Error = ValidationError;

    fn try_from(input: RegisteredAddressInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl From<RegisteredAddress> for RegisteredAddressInput {
    fn from(registered: RegisteredAddress) -> Self {
        Self {
            id: registered.id.into(),
            address: registered.address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::error::{DomainError, Field};

    fn valid_input() -> AddressInput {
        AddressInput {
            street: "Street ABCD".to_string(),
            district: "Espirito Santo".to_string(),
            city: "Jose dos Campos".to_string(),
            state: "Rio de Janeiro".to_string(),
            complement: "Complement".to_string(),
            number: "11111".to_string(),
            zipcode: "23970000".to_string(),
            latitude: "-23.307577".to_string(),
            longitude: "-44.754146".to_string(),
        }
    }

    #[test]
    fn test_address_valid() {
        let address = Address::new(valid_input()).unwrap();
        assert!(*address.street() == "Street ABCD");
        assert!(*address.zipcode() == "23970000");
    }

    #[test]
    fn test_address_invalid_fields() {
        let cases: Vec<(AddressInput, ValidationError)> = vec![
            (
                AddressInput {
                    street: "a".repeat(MIN_STREET_LENGTH - 1),
                    ..valid_input()
                },
                ValidationError::MinLength {
                    field: Field::Street,
                    min: MIN_STREET_LENGTH,
                },
            ),
            (
                AddressInput {
                    street: "a".repeat(MAX_STREET_LENGTH + 1),
                    ..valid_input()
                },
                ValidationError::MaxLength {
                    field: Field::Street,
                    max: MAX_STREET_LENGTH,
                },
            ),
            (
                AddressInput {
                    district: "a".repeat(MIN_DISTRICT_LENGTH - 1),
                    ..valid_input()
                },
                ValidationError::MinLength {
                    field: Field::District,
                    min: MIN_DISTRICT_LENGTH,
                },
            ),
            (
                AddressInput {
                    city: "a".repeat(MAX_CITY_LENGTH + 1),
                    ..valid_input()
                },
                ValidationError::MaxLength {
                    field: Field::City,
                    max: MAX_CITY_LENGTH,
                },
            ),
            (
                AddressInput {
                    state: "a".repeat(MIN_STATE_LENGTH - 1),
                    ..valid_input()
                },
                ValidationError::MinLength {
                    field: Field::State,
                    min: MIN_STATE_LENGTH,
                },
            ),
            (
                AddressInput {
                    complement: "a".repeat(MAX_COMPLEMENT_LENGTH + 1),
                    ..valid_input()
                },
                ValidationError::MaxLength {
                    field: Field::Complement,
                    max: MAX_COMPLEMENT_LENGTH,
                },
            ),
            (
                AddressInput {
                    number: String::new(),
                    ..valid_input()
                },
                ValidationError::MinLength {
                    field: Field::AddressNumber,
                    min: MIN_ADDRESS_NUMBER_LENGTH,
                },
            ),
            (
                AddressInput {
                    zipcode: "1".repeat(ZIPCODE_LENGTH + 1),
                    ..valid_input()
                },
                ValidationError::Length {
                    field: Field::Zipcode,
                    expected: ZIPCODE_LENGTH,
                },
            ),
            (
                AddressInput {
                    zipcode: "a".repeat(ZIPCODE_LENGTH),
                    ..valid_input()
                },
                ValidationError::NotNumeric {
                    field: Field::Zipcode,
                },
            ),
            (
                AddressInput {
                    latitude: "aaaaa".to_string(),
                    ..valid_input()
                },
                ValidationError::InvalidFormat {
                    field: Field::Latitude,
                },
            ),
            (
                AddressInput {
                    longitude: "aaaaa".to_string(),
                    ..valid_input()
                },
                ValidationError::InvalidFormat {
                    field: Field::Longitude,
                },
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(Address::new(input), Err(expected));
        }
    }

    #[test]
    fn test_first_failing_field_wins() {
        let input = AddressInput {
            city: String::new(),
            zipcode: String::new(),
            ..valid_input()
        };
        let err = Address::new(input).unwrap_err();
        assert_eq!(err.field(), Field::City);
    }

    #[test]
    fn test_registered_address_valid() {
        let registered = RegisteredAddress::new(RegisteredAddressInput {
            id: 50,
            address: valid_input(),
        })
        .unwrap();
        assert!(registered.id() == 50);
        assert!(*registered.city() == "Jose dos Campos");
    }

    #[test]
    fn test_registered_address_invalid_id() {
        let invalid_id = ValidationError::InvalidId {
            field: Field::AddressId,
        };

        let mut input = RegisteredAddressInput {
            id: 0,
            address: valid_input(),
        };
        assert_eq!(RegisteredAddress::new(input.clone()), Err(invalid_id.clone()));

        input.id = -10;
        assert_eq!(RegisteredAddress::new(input.clone()), Err(invalid_id.clone()));

        // id is checked before the address fields
        input.address.city = "a".repeat(MIN_CITY_LENGTH - 1);
        assert_eq!(RegisteredAddress::new(input.clone()), Err(invalid_id));

        input.id = 10;
        assert!(matches!(
            RegisteredAddress::new(input),
            Err(ValidationError::MinLength { field: Field::City, .. })
        ));
    }

    #[test]
    fn test_missing_field_is_a_validation_error() {
        let err = Address::from_json(r#"{"District": "District"}"#).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::MinLength {
                field: Field::Street,
                ..
            })
        ));
    }

    #[test]
    fn test_into_input_rebuilds_same_address() {
        let address = Address::new(valid_input()).unwrap();
        let input = AddressInput::from(address.clone());
        assert_eq!(input, valid_input());
        assert_eq!(Address::new(input).unwrap(), address);
    }
}
