//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, persistence).

use std::fmt;

use serde_json::error::Category;
use thiserror::Error;

/// Field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Street,
    District,
    City,
    State,
    Complement,
    AddressNumber,
    Zipcode,
    Latitude,
    Longitude,
    UserName,
    AddressId,
    UserId,
}

impl Field {
    /// Upper snake case identifier used in error codes
    pub fn code(&self) -> &'static str {
        match self {
            Field::Street => "STREET",
            Field::District => "DISTRICT",
            Field::City => "CITY",
            Field::State => "STATE",
            Field::Complement => "COMPLEMENT",
            Field::AddressNumber => "ADDRESS_NUMBER",
            Field::Zipcode => "ZIPCODE",
            Field::Latitude => "LATITUDE",
            Field::Longitude => "LONGITUDE",
            Field::UserName => "USER_NAME",
            Field::AddressId => "ADDRESS_ID",
            Field::UserId => "USER_ID",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Street => "street",
            Field::District => "district",
            Field::City => "city",
            Field::State => "state",
            Field::Complement => "complement",
            Field::AddressNumber => "address number",
            Field::Zipcode => "zipcode",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::UserName => "user name",
            Field::AddressId => "address id",
            Field::UserId => "user id",
        };
        f.write_str(name)
    }
}

/// A value failed one of its construction rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} should have at least {min} characters")]
    MinLength { field: Field, min: usize },

    #[error("{field} should have at most {max} characters")]
    MaxLength { field: Field, max: usize },

    #[error("{field} should have exactly {expected} characters")]
    Length { field: Field, expected: usize },

    #[error("{field} should contain only digits")]
    NotNumeric { field: Field },

    /// Coordinates use the `X.XXXX` / `-X.XXXX` decimal form
    #[error("{field} should have a valid format")]
    InvalidFormat { field: Field },

    #[error("{field} should contain only letters and digits")]
    InvalidCharacter { field: Field },

    #[error("{field} should be a positive number")]
    InvalidId { field: Field },
}

impl ValidationError {
    /// Field that failed validation
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MinLength { field, .. }
            | ValidationError::MaxLength { field, .. }
            | ValidationError::Length { field, .. }
            | ValidationError::NotNumeric { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::InvalidCharacter { field }
            | ValidationError::InvalidId { field } => *field,
        }
    }

    /// Rule that was violated, independent of the field
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MinLength { .. } => "MIN_LENGTH",
            ValidationError::MaxLength { .. } => "MAX_LENGTH",
            ValidationError::Length { .. } => "LENGTH",
            ValidationError::NotNumeric { .. } => "NOT_NUMERIC",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::InvalidCharacter { .. } => "INVALID_CHARACTER",
            ValidationError::InvalidId { .. } => "INVALID",
        }
    }

    /// Stable machine-readable code, e.g. `STREET_MIN_LENGTH`
    pub fn code(&self) -> String {
        format!("{}_{}", self.field().code(), self.kind())
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// A field failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Payload is not well-formed JSON
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// Payload is well-formed JSON but a field has the wrong type
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Create a malformed payload error
    pub fn malformed(msg: impl Into<String>) -> Self {
        DomainError::Malformed(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Create an invalid payload error
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        DomainError::InvalidPayload(msg.into())
    }

    /// Validation error carried by this error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            DomainError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => DomainError::invalid_payload(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => {
                DomainError::malformed(err.to_string())
            }
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
