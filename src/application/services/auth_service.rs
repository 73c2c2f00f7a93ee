//! Authentication service for bearer token validation.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::TokenIntrospector;
use crate::error::AppError;

/// Identity of an authenticated caller, attached to the request by the
/// auth middleware.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Principal {
    pub subject: Option<String>,
    pub username: Option<String>,
}

/// Service for authenticating API requests via bearer tokens.
///
/// Stateless: every call introspects the token with the identity provider.
/// Nothing is cached between requests.
pub struct AuthService {
    introspector: Arc<dyn TokenIntrospector>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(introspector: Arc<dyn TokenIntrospector>) -> Self {
        Self { introspector }
    }

    /// Authenticates a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - The token is empty
    /// - The identity provider call fails
    /// - The token is reported inactive or expired
    pub async fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        if token.is_empty() {
            metrics::counter!("auth_introspections_total", "outcome" => "rejected").increment(1);
            return Err(AppError::unauthorized(
                "invalid Authorization header",
                json!({"reason": "Bearer token is empty"}),
            ));
        }

        let result = match self.introspector.introspect(token).await {
            Ok(result) => result,
            Err(e) => {
                metrics::counter!("auth_introspections_total", "outcome" => "error").increment(1);
                return Err(e);
            }
        };

        if !result.active {
            metrics::counter!("auth_introspections_total", "outcome" => "inactive").increment(1);
            tracing::debug!("Rejected inactive token");
            return Err(AppError::unauthorized(
                "token expired or inactive",
                json!({"reason": "Token is not active"}),
            ));
        }

        metrics::counter!("auth_introspections_total", "outcome" => "active").increment(1);

        Ok(Principal {
            subject: result.subject,
            username: result.username,
        })
    }
}
