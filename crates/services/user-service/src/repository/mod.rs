//! Repository layer for data access.

mod in_memory;
mod user_repository;

pub use in_memory::InMemoryUserStore;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
