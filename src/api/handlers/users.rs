//! Handlers for the legacy users API.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use validator::Validate;

use crate::api::dto::user::{UpdateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::UsersState;

/// Returns a user by id.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer.
/// Returns 404 Not Found if the user does not exist.
pub async fn get_user_handler(
    State(state): State<UsersState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Path(id) = id?;

    let user = state.user_service.get(id).await?;

    Ok(Json(user.into()))
}

/// Replaces name and email of a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Request Body
///
/// ```json
/// { "name": "Grace Hopper", "email": "grace@example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer or the body is invalid.
/// Returns 404 Not Found if the user does not exist.
pub async fn update_user_handler(
    State(state): State<UsersState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let user = state.user_service.update(id, payload.into()).await?;

    Ok(Json(user.into()))
}
