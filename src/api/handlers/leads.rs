//! Handler for lead capture.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::lead::{CreateLeadRequest, LeadResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Records a marketing lead. Public endpoint.
///
/// # Endpoint
///
/// `POST /api/leads`
///
/// # Request Body
///
/// ```json
/// {
///   "fullName": "Ada Lovelace",
///   "email": "ada@example.com",
///   "company": "Analytical Engines",   // optional
///   "eventType": "corporate",          // optional
///   "budget": "10k-20k",               // optional
///   "message": "Looking for a box"     // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be parsed or the email is invalid.
/// Invalid input never reaches the record store.
/// Returns 502 Bad Gateway if the record store fails or rejects the lead.
pub async fn create_lead_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLeadRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LeadResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let lead = state.experience_service.create_lead(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(lead.into())))
}
