//! Event entity representing a published experience.

use chrono::{DateTime, Utc};

/// An experience as exposed by the API.
///
/// Image fields hold absolute URLs. They are always synthesized by the record
/// store adapter from the stored filenames and are never taken from input.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
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

/// Input data for creating an event.
///
/// `primary_image` and `gallery` carry raw filenames as known to the record
/// store, not URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub location: String,
    pub venue: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: Option<String>,
    pub primary_image: Option<String>,
    pub gallery: Vec<String>,
    pub tags: Vec<String>,
}
