//! User Service Library
//!
//! This crate provides user lookup on top of the validated domain entities.
//! It can be driven from the bundled CLI or embedded in another binary.

pub mod config;
pub mod payload;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::{info, warn};

use common::AppResult;
use domain::{AddressId, RegisteredUser, UserId};

use crate::config::UserServiceConfig;
use crate::repository::InMemoryUserStore;
use crate::service::{UserManager, UserService};

/// Load the seed from `config` and fetch one user through [`UserManager`].
///
/// Raw ids are validated before the store is touched.
pub async fn run_info(
    config: &UserServiceConfig,
    user_id: i64,
    address_id: i64,
) -> AppResult<RegisteredUser> {
    let user_id = UserId::new(user_id)?;
    let address_id = AddressId::new(address_id)?;

    let store = InMemoryUserStore::from_file(&config.seed_path).await?;
    let user_service = UserManager::new(Arc::new(store));

    let user = user_service.get_user_info(user_id, address_id).await?;
    if user.address(address_id).is_none() {
        warn!("User {} has no address {}", user_id, address_id);
    } else {
        info!("Found user {} with address {}", user_id, address_id);
    }

    Ok(user)
}
