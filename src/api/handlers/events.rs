//! Handlers for event endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::event::{CreateEventRequest, EventListResponse, EventResponse};
use crate::application::services::Principal;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every event, most recent first.
///
/// # Endpoint
///
/// `GET /api/events`
///
/// # Response
///
/// ```json
/// { "data": [ { "id": "abc", "title": "...", "startDate": "...", ... } ] }
/// ```
///
/// # Errors
///
/// Returns 502 Bad Gateway if the record store fails.
pub async fn list_events_handler(
    State(state): State<AppState>,
) -> Result<Json<EventListResponse>, AppError> {
    let events = state.experience_service.list_events().await?;

    Ok(Json(EventListResponse {
        data: events.into_iter().map(EventResponse::from).collect(),
    }))
}

/// Returns a single event.
///
/// # Endpoint
///
/// `GET /api/events/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the record store has no such event.
/// Returns 502 Bad Gateway for any other upstream failure.
pub async fn get_event_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let event = state.experience_service.get_event(&id).await?;

    Ok(Json(event.into()))
}

/// Creates an event. Requires a valid bearer token.
///
/// # Endpoint
///
/// `POST /api/events`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Champions Night",
///   "location": "Madrid",
///   "startDate": "2025-05-31T19:00:00Z",
///   "endDate": "2025-05-31T23:00:00Z",
///   "primaryImage": "cover.jpg",      // optional, filename
///   "gallery": ["1.jpg", "2.jpg"],     // optional, filenames
///   "tags": ["football"]               // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be parsed or fails validation.
/// Returns 502 Bad Gateway if the record store fails or rejects the event.
pub async fn create_event_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let event = state
        .experience_service
        .create_event(payload.into())
        .await?;

    tracing::info!(
        event_id = %event.id,
        subject = principal.subject.as_deref().unwrap_or("-"),
        username = principal.username.as_deref().unwrap_or("-"),
        "Event created"
    );

    Ok((StatusCode::CREATED, Json(event.into())))
}
