//! Bearer token authentication middleware.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::application::services::AuthService;
use crate::error::AppError;

const BEARER_PREFIX: &str = "bearer ";

/// Authenticates requests using Bearer tokens from Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The scheme is matched case-insensitively.
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Introspect the token with the identity provider
/// 3. Attach the resulting [`Principal`](crate::application::services::Principal)
///    as a request extension
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - The scheme is not `Bearer` or the token is empty
/// - The token is inactive or the identity provider cannot be reached
///
/// A malformed header never reaches the identity provider.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/events", post(create_event_handler))
///     .route_layer(middleware::from_fn_with_state(state.auth_service.clone(), auth::layer));
/// ```
pub async fn layer(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())?;

    let principal = auth.authenticate(token).await?;
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Extracts the bearer token from request headers.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized("missing Authorization header", json!({})))?;

    let value = value.to_str().map_err(|_| invalid_header())?;

    let token = value
        .get(..BEARER_PREFIX.len())
        .filter(|scheme| scheme.eq_ignore_ascii_case(BEARER_PREFIX))
        .map(|_| value[BEARER_PREFIX.len()..].trim())
        .ok_or_else(invalid_header)?;

    if token.is_empty() {
        return Err(invalid_header());
    }

    Ok(token)
}

fn invalid_header() -> AppError {
    AppError::unauthorized(
        "invalid Authorization header",
        json!({"reason": "expected 'Bearer <token>'"}),
    )
}
