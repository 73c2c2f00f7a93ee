//! DTOs for event endpoints.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Event, EventInput};

/// Request body for `POST /api/events`.
///
/// `primaryImage` and `gallery` are filenames already uploaded to the record
/// store. They are turned into URLs only on the way out.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range"))]
pub struct CreateEventRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    pub subtitle: Option<String>,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    pub venue: Option<String>,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    pub status: Option<String>,

    pub primary_image: Option<String>,

    #[serde(default)]
    pub gallery: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

fn validate_date_range(request: &CreateEventRequest) -> Result<(), ValidationError> {
    if request.start_date > request.end_date {
        return Err(ValidationError::new("date_range")
            .with_message(Cow::Borrowed("startDate must not be after endDate")));
    }
    Ok(())
}

impl From<CreateEventRequest> for EventInput {
    fn from(request: CreateEventRequest) -> Self {
        EventInput {
            title: request.title,
            subtitle: request.subtitle,
            description: request.description,
            location: request.location,
            venue: request.venue,
            start_date: request.start_date,
            end_date: request.end_date,
            status: request.status,
            primary_image: request.primary_image,
            gallery: request.gallery,
            tags: request.tags,
        }
    }
}

/// JSON representation of an event.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub location: String,
    pub venue: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub primary_image: String,
    pub gallery_images: Vec<String>,
    pub tags: Vec<String>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            slug: event.slug,
            title: event.title,
            subtitle: event.subtitle,
            description: event.description,
            location: event.location,
            venue: event.venue,
            start_date: event.start_date,
            end_date: event.end_date,
            status: event.status,
            primary_image: event.primary_image,
            gallery_images: event.gallery_images,
            tags: event.tags,
        }
    }
}

/// Envelope for `GET /api/events`.
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub data: Vec<EventResponse>,
}
