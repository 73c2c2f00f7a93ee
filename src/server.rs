//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream clients, services and router for each binary and runs
//! the Axum server until Ctrl-C.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{AuthService, ExperienceService, UserService};
use crate::config::{Config, KeycloakConfig, UsersConfig};
use crate::infrastructure::keycloak::KeycloakIntrospector;
use crate::infrastructure::persistence::PgUserRepository;
use crate::infrastructure::pocketbase::PocketBaseRepository;
use crate::routes::{app_router, users_router};
use crate::state::{AppState, UsersState};

fn auth_service(config: &KeycloakConfig, timeout: Duration) -> Result<AuthService> {
    let introspector = KeycloakIntrospector::new(config, timeout)
        .context("Failed to build Keycloak client")?;
    tracing::info!(endpoint = %introspector.endpoint(), "Token introspection configured");

    Ok(AuthService::new(Arc::new(introspector)))
}

/// Runs the events API with the given configuration.
///
/// Initializes:
/// - PocketBase client
/// - Keycloak introspection client
/// - Axum HTTP server
///
/// Upstreams are not contacted at startup.
///
/// # Errors
///
/// Returns an error if:
/// - A base URL cannot be used to build a client
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = PocketBaseRepository::new(&config.pocketbase, config.http_timeout())
        .context("Failed to build PocketBase client")?;

    let experience_service = Arc::new(ExperienceService::new(Arc::new(repository)));
    let auth_service = Arc::new(auth_service(&config.keycloak, config.http_timeout())?);

    let state = AppState::new(experience_service, auth_service);
    let app = app_router(state, &config.allowed_origins, config.lead_rate_limit);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .context("Invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Runs the users API with the given configuration.
///
/// Connects to PostgreSQL and applies migrations before serving.
///
/// # Errors
///
/// Returns an error if the database is unreachable, a migration fails,
/// or the server cannot bind.
pub async fn run_users(config: UsersConfig) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repository = PgUserRepository::new(Arc::new(pool));
    let user_service = Arc::new(UserService::new(Arc::new(repository)));
    let auth_service = Arc::new(auth_service(&config.keycloak, config.http_timeout())?);

    let app = users_router(UsersState::new(user_service, auth_service));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .context("Invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
