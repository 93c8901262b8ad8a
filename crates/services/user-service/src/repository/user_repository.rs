//! User repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{RegisteredUser, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations return [`common::AppError::NotFound`] for unknown ids.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Load a user together with their saved addresses
    async fn get_user_info(&self, user_id: UserId) -> AppResult<RegisteredUser>;
}
