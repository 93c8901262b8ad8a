//! Read-only user store backed by a map built once at startup.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use common::{AppError, AppResult, OptionExt};
use domain::{RegisteredUser, RegisteredUserInput, UserId};

use super::UserRepository;

/// In-memory implementation of [`UserRepository`].
///
/// The map is never mutated after construction, so lookups need no locking.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: HashMap<UserId, RegisteredUser>,
}

impl InMemoryUserStore {
    /// Build a store from already validated users.
    ///
    /// Fails with `BadRequest` when two users share an id.
    pub fn new(users: impl IntoIterator<Item = RegisteredUser>) -> AppResult<Self> {
        let mut map = HashMap::new();
        for user in users {
            let id = user.id();
            if map.insert(id, user).is_some() {
                return Err(AppError::bad_request(format!("Duplicate user id {}", id)));
            }
        }
        Ok(Self { users: map })
    }

    /// Decode a JSON array of registered users, validating each one.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let inputs: Vec<RegisteredUserInput> =
            serde_json::from_str(json).map_err(|e| AppError::malformed(e.to_string()))?;

        let users = inputs
            .into_iter()
            .map(RegisteredUser::new)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(users)
    }

    /// Load a JSON seed file.
    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::internal(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let store = Self::from_json(&json)?;
        info!("Loaded {} users from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn get_user_info(&self, user_id: UserId) -> AppResult<RegisteredUser> {
        debug!("Looking up user {}", user_id);
        self.users.get(&user_id).cloned().ok_or_not_found()
    }
}
