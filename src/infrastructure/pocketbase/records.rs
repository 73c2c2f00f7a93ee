//! Wire records exchanged with PocketBase and their mapping to domain entities.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::domain::entities::{Event, EventInput, Lead, LeadInput};

/// PocketBase timestamp layout (`2025-06-01 09:00:00.000Z`).
const POCKETBASE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.fZ";

/// Paginated list envelope returned by `GET /api/collections/{c}/records`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// Records matching the query across all pages.
    #[serde(default)]
    pub total_items: u64,
    pub items: Vec<T>,
}

/// Error envelope PocketBase returns on non-success responses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    #[serde(default)]
    pub collection_id: String,
    #[serde(default)]
    pub collection_name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub slug: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub subtitle: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub location: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub venue: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_date: DateTime<Utc>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub primary_image: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub gallery: Vec<String>,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub full_name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub email: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub company: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub event_type: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub budget: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub message: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created: DateTime<Utc>,
}

/// Flat create payload for the `events` collection.
///
/// Every field is sent, optional ones as empty values.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub venue: &'a str,
    pub status: &'a str,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub primary_image: &'a str,
    pub gallery: &'a [String],
    pub tags: &'a [String],
}

impl<'a> From<&'a EventInput> for EventPayload<'a> {
    fn from(input: &'a EventInput) -> Self {
        Self {
            title: &input.title,
            subtitle: input.subtitle.as_deref().unwrap_or_default(),
            description: input.description.as_deref().unwrap_or_default(),
            location: &input.location,
            venue: input.venue.as_deref().unwrap_or_default(),
            status: input.status.as_deref().unwrap_or_default(),
            start_date: input.start_date,
            end_date: input.end_date,
            primary_image: input.primary_image.as_deref().unwrap_or_default(),
            gallery: &input.gallery,
            tags: &input.tags,
        }
    }
}

/// Flat create payload for the `leads` collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub company: &'a str,
    pub event_type: &'a str,
    pub budget: &'a str,
    pub message: &'a str,
}

impl<'a> From<&'a LeadInput> for LeadPayload<'a> {
    fn from(input: &'a LeadInput) -> Self {
        Self {
            full_name: &input.full_name,
            email: &input.email,
            company: input.company.as_deref().unwrap_or_default(),
            event_type: input.event_type.as_deref().unwrap_or_default(),
            budget: input.budget.as_deref().unwrap_or_default(),
            message: input.message.as_deref().unwrap_or_default(),
        }
    }
}

/// Parses a PocketBase timestamp, accepting RFC 3339 as well.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, POCKETBASE_DATETIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}

/// Builds the public URL of a file attached to a record.
pub fn file_url(files_base_url: &str, collection: &str, record_id: &str, filename: &str) -> String {
    format!("{files_base_url}/api/files/{collection}/{record_id}/{filename}")
}

/// Maps a wire record to an [`Event`], synthesizing image URLs.
///
/// Files are addressed by collection name, or by collection id when the
/// record carries no name.
pub fn map_event(record: EventRecord, files_base_url: &str) -> Event {
    let files_collection = if record.collection_name.is_empty() {
        record.collection_id.as_str()
    } else {
        record.collection_name.as_str()
    };

    let primary_image = if record.primary_image.is_empty() {
        String::new()
    } else {
        file_url(
            files_base_url,
            files_collection,
            &record.id,
            &record.primary_image,
        )
    };

    let gallery_images = record
        .gallery
        .iter()
        .map(|filename| file_url(files_base_url, files_collection, &record.id, filename))
        .collect();

    Event {
        id: record.id,
        slug: record.slug,
        title: record.title,
        subtitle: record.subtitle,
        description: record.description,
        location: record.location,
        venue: record.venue,
        start_date: record.start_date,
        end_date: record.end_date,
        status: record.status,
        primary_image,
        gallery_images,
        tags: record.tags,
    }
}

pub fn map_events(records: Vec<EventRecord>, files_base_url: &str) -> Vec<Event> {
    records
        .into_iter()
        .map(|record| map_event(record, files_base_url))
        .collect()
}

pub fn map_lead(record: LeadRecord) -> Lead {
    Lead {
        id: record.id,
        full_name: record.full_name,
        email: record.email,
        company: record.company,
        event_type: record.event_type,
        budget: record.budget,
        message: record.message,
        created_at: record.created,
    }
}
