//! DTOs for the legacy users API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{User, UserUpdate};

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            name: request.name,
            email: request.email,
        }
    }
}

/// JSON representation of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
