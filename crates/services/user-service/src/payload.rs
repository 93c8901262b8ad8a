//! Validation of standalone JSON payloads.

use clap::ValueEnum;
use serde_json::Value;

use common::{AppError, AppResult};
use domain::{Address, RegisteredAddress, RegisteredUser};

/// Kind of entity a payload should decode into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    Address,
    RegisteredAddress,
    User,
}

/// Decode and validate `json` as `kind`, returning the normalized entity as JSON.
pub fn validate_payload(kind: PayloadKind, json: &str) -> AppResult<Value> {
    let value = match kind {
        PayloadKind::Address => to_value(&Address::from_json(json)?)?,
        PayloadKind::RegisteredAddress => to_value(&RegisteredAddress::from_json(json)?)?,
        PayloadKind::User => to_value(&RegisteredUser::from_json(json)?)?,
    };
    Ok(value)
}

fn to_value<T: serde::Serialize>(entity: &T) -> AppResult<Value> {
    serde_json::to_value(entity).map_err(|e| AppError::internal(e.to_string()))
}
