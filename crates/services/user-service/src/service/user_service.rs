//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use common::AppResult;
use domain::{AddressId, RegisteredUser, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get a user with their saved addresses.
    ///
    /// `address_id` is the address the caller is working with; the lookup
    /// itself is by user only.
    async fn get_user_info(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> AppResult<RegisteredUser>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user_info(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> AppResult<RegisteredUser> {
        debug!("Getting info for user {} (address {})", user_id, address_id);
        self.repo.get_user_info(user_id).await
    }
}
