//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! validated value objects, the address and user entities built from them,
//! and the validation error taxonomy.

pub mod constants;
pub mod error;
pub mod value_object;

pub mod address;
pub mod user;

pub use constants::*;
pub use address::{Address, AddressInput, RegisteredAddress, RegisteredAddressInput};
pub use error::{DomainError, DomainResult, Field, ValidationError};
pub use user::{RegisteredUser, RegisteredUserInput};
pub use value_object::{
    AddressId, AddressNumber, City, Complement, District, Latitude, Longitude, State, Street,
    UserId, UserName, ValueObject, Zipcode,
};
