//! Trait for bearer token introspection.

use crate::error::AppError;
use async_trait::async_trait;

/// Result of a token introspection call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Introspection {
    pub active: bool,
    /// Subject (`sub`) of the token, when reported.
    pub subject: Option<String>,
    /// Preferred username, when reported.
    pub username: Option<String>,
}

/// Asks the identity provider whether a token is currently valid.
///
/// # Implementations
///
/// - [`crate::infrastructure::keycloak::KeycloakIntrospector`] - Keycloak introspection endpoint
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenIntrospector: Send + Sync {
    /// Introspects a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the identity provider cannot be
    /// reached or refuses the call.
    async fn introspect(&self, token: &str) -> Result<Introspection, AppError>;
}
