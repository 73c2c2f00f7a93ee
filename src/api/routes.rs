//! API route configuration.
//!
//! Routes are grouped by access policy. Authentication and rate limiting
//! are attached by [`crate::routes`].

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    create_event_handler, create_lead_handler, get_event_handler, get_user_handler,
    list_events_handler, update_user_handler,
};
use crate::state::{AppState, UsersState};

/// Public read routes.
///
/// # Endpoints
///
/// - `GET /events`       - List events, most recent first
/// - `GET /events/{id}`  - Single event
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events_handler))
        .route("/events/{id}", get(get_event_handler))
}

/// Public lead capture.
///
/// # Endpoints
///
/// - `POST /leads` - Record a marketing lead
pub fn lead_routes() -> Router<AppState> {
    Router::new().route("/leads", post(create_lead_handler))
}

/// Routes requiring a valid bearer token.
///
/// # Endpoints
///
/// - `POST /events` - Create an event
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/events", post(create_event_handler))
}

/// Legacy users routes. All of them require a valid bearer token.
///
/// # Endpoints
///
/// - `GET /users/{id}` - Fetch a user
/// - `PUT /users/{id}` - Replace name and email
pub fn user_routes() -> Router<UsersState> {
    Router::new().route(
        "/users/{id}",
        get(get_user_handler).put(update_user_handler),
    )
}
