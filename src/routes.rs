//! Top-level router configuration.
//!
//! # Route Structure
//!
//! Events API (`thunder-events`):
//!
//! - `GET  /health`           - Health check: record store (public)
//! - `GET  /api/events`       - Event list (public)
//! - `GET  /api/events/{id}`  - Event detail (public)
//! - `POST /api/leads`        - Lead capture (public, optionally rate limited)
//! - `POST /api/events`       - Event creation (Bearer token required)
//!
//! Users API (`users-api`):
//!
//! - `GET  /users/{id}`       - Bearer token required
//! - `PUT  /users/{id}`       - Bearer token required
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origins
//! - **Rate limiting** - Per-IP token bucket on lead capture, when enabled
//! - **Authentication** - Bearer token introspection
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, cors, rate_limit, tracing};
use crate::state::{AppState, UsersState};

/// Builds the events API router without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - CORS origins; `*` allows any
/// - `lead_rate_limit` - when `true`, `POST /api/leads` is limited per peer IP;
///   the server must then provide `ConnectInfo<SocketAddr>`
pub fn api_router(state: AppState, allowed_origins: &[String], lead_rate_limit: bool) -> Router {
    let protected = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.auth_service.clone(),
        auth::layer,
    ));

    let leads = if lead_rate_limit {
        api::routes::lead_routes().layer(rate_limit::lead_layer())
    } else {
        api::routes::lead_routes()
    };

    let api_router = Router::new()
        .merge(api::routes::public_routes())
        .merge(leads)
        .merge(protected);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer())
}

/// Constructs the events API application with all routes and middleware.
pub fn app_router(
    state: AppState,
    allowed_origins: &[String],
    lead_rate_limit: bool,
) -> NormalizePath<Router> {
    let router = api_router(state, allowed_origins, lead_rate_limit);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Builds the users API router without path normalization.
pub fn users_api_router(state: UsersState) -> Router {
    api::routes::user_routes()
        .route_layer(middleware::from_fn_with_state(
            state.auth_service.clone(),
            auth::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the users API application.
pub fn users_router(state: UsersState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(users_api_router(state))
}
