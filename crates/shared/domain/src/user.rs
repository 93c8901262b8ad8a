//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::address::{RegisteredAddress, RegisteredAddressInput};
use crate::error::{DomainResult, ValidationError};
use crate::value_object::{AddressId, UserId, UserName};

/// Raw registered user as stored or received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisteredUserInput {
    #[serde(rename = "id")]
    pub id: i64,
    pub name: String,
    pub addresses: Vec<RegisteredAddressInput>,
}

/// User with an identity and the addresses saved on the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisteredUser {
    #[serde(rename = "id")]
    id: UserId,
    name: UserName,
    addresses: Vec<RegisteredAddress>,
}

impl RegisteredUser {
    /// Validate id, then name, then each address in order.
    pub fn new(input: RegisteredUserInput) -> Result<Self, ValidationError> {
        let id = UserId::new(input.id)?;
        let name = UserName::new(input.name)?;
        let addresses = input
            .addresses
            .into_iter()
            .map(RegisteredAddress::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            name,
            addresses,
        })
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        let input: RegisteredUserInput = serde_json::from_str(json)?;
        Ok(Self::new(input)?)
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn addresses(&self) -> &[RegisteredAddress] {
        &self.addresses
    }

    /// Find one of the user's saved addresses
    pub fn address(&self, id: AddressId) -> Option<&RegisteredAddress> {
        self.addresses.iter().find(|address| address.id() == id)
    }
}

impl TryFrom<RegisteredUserInput> for RegisteredUser {
    type Error = ValidationError;

    fn try_from(input: RegisteredUserInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl From<RegisteredUser> for RegisteredUserInput {
    fn from(user: RegisteredUser) -> Self {
        Self {
            id: user.id.into(),
            name: user.name.into(),
            addresses: user.addresses.into_iter().map(Into::into).collect(),
        }
    }
}
