//! Keycloak token introspection client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::config::KeycloakConfig;
use crate::domain::repositories::{Introspection, TokenIntrospector};
use crate::error::AppError;

/// Errors raised while calling Keycloak.
#[derive(Debug, thiserror::Error)]
pub enum KeycloakError {
    #[error("invalid Keycloak base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("identity provider responded {0}")]
    Status(u16),

    #[error("malformed introspection response: {0}")]
    Decode(String),
}

impl From<KeycloakError> for AppError {
    fn from(e: KeycloakError) -> Self {
        AppError::unauthorized(e.to_string(), json!({}))
    }
}

#[derive(Debug, Deserialize)]
struct IntrospectionResponse {
    #[serde(default)]
    active: Option<bool>,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    preferred_username: Option<String>,
}

/// Validates bearer tokens with the realm's introspection endpoint.
///
/// Client credentials are sent with HTTP basic auth:
///
/// ```text
/// POST {base}/realms/{realm}/protocol/openid-connect/token/introspect
/// token=<token>&token_type_hint=requesting_party_token
/// ```
pub struct KeycloakIntrospector {
    client: Client,
    endpoint: Url,
    client_id: String,
    client_secret: String,
}

impl KeycloakIntrospector {
    /// Creates an introspector for the configured realm.
    ///
    /// # Errors
    ///
    /// Returns [`KeycloakError::InvalidBaseUrl`] if the base URL is not an
    /// absolute http(s) URL, or [`KeycloakError::Transport`] if the HTTP
    /// client cannot be built.
    pub fn new(config: &KeycloakConfig, timeout: Duration) -> Result<Self, KeycloakError> {
        let endpoint = introspection_endpoint(&config.base_url, &config.realm)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn call(&self, token: &str) -> Result<IntrospectionResponse, KeycloakError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("token", token),
                ("token_type_hint", "requesting_party_token"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(KeycloakError::Status(status.as_u16()));
        }

        response
            .json::<IntrospectionResponse>()
            .await
            .map_err(|e| KeycloakError::Decode(e.to_string()))
    }
}

fn introspection_endpoint(base_url: &str, realm: &str) -> Result<Url, KeycloakError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| KeycloakError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| KeycloakError::InvalidBaseUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend([
            "realms",
            realm,
            "protocol",
            "openid-connect",
            "token",
            "introspect",
        ]);

    Ok(url)
}

#[async_trait]
impl TokenIntrospector for KeycloakIntrospector {
    async fn introspect(&self, token: &str) -> Result<Introspection, AppError> {
        let response = self.call(token).await.map_err(|e| {
            tracing::warn!(error = %e, "Token introspection failed");
            AppError::from(e)
        })?;

        Ok(Introspection {
            active: response.active.unwrap_or(false),
            subject: response.sub,
            username: response.preferred_username,
        })
    }
}
