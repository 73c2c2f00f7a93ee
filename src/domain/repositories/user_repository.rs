//! Repository trait for the legacy users table.

use crate::domain::entities::{User, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `users` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Overwrites name and email of a user.
    ///
    /// Returns `Ok(None)` when no row has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, AppError>;
}
