//! DTOs for lead capture.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Lead, LeadInput};

/// Request body for `POST /api/leads`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    #[validate(length(min = 1, message = "fullName is required"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub company: Option<String>,

    pub event_type: Option<String>,

    pub budget: Option<String>,

    pub message: Option<String>,
}

impl From<CreateLeadRequest> for LeadInput {
    fn from(request: CreateLeadRequest) -> Self {
        LeadInput {
            full_name: request.full_name,
            email: request.email,
            company: request.company,
            event_type: request.event_type,
            budget: request.budget,
            message: request.message,
        }
    }
}

/// JSON representation of a stored lead.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub event_type: String,
    pub budget: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            full_name: lead.full_name,
            email: lead.email,
            company: lead.company,
            event_type: lead.event_type,
            budget: lead.budget,
            message: lead.message,
            created_at: lead.created_at,
        }
    }
}
