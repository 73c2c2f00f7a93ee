//! Legacy user lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for reading and updating rows of the `users` table.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": id})))
    }

    /// Replaces name and email of a user and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, update: UserUpdate) -> Result<User, AppError> {
        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": id})))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;

    #[tokio::test]
    async fn test_get_existing_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|id| {
                Ok(Some(User {
                    id,
                    name: "Grace".to_string(),
                    email: "grace@example.com".to_string(),
                }))
            });

        let service = UserService::new(Arc::new(mock_repo));

        let user = service.get(7).await.unwrap();

        assert_eq!(user.name, "Grace");
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get(404).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .update(
                1,
                UserUpdate {
                    name: "X".to_string(),
                    email: "x@example.com".to_string(),
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_returns_stored_row() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_update()
            .withf(|id, update| *id == 3 && update.name == "Linus")
            .times(1)
            .returning(|id, update| {
                Ok(Some(User {
                    id,
                    name: update.name,
                    email: update.email,
                }))
            });

        let service = UserService::new(Arc::new(mock_repo));

        let user = service
            .update(
                3,
                UserUpdate {
                    name: "Linus".to_string(),
                    email: "linus@example.com".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.email, "linus@example.com");
    }
}
