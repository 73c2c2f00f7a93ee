//! PocketBase implementation of the experience repository.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use super::records::{
    ApiErrorBody, EventPayload, EventRecord, LeadPayload, LeadRecord, ListResponse, map_event,
    map_events, map_lead,
};
use crate::config::PocketBaseConfig;
use crate::domain::entities::{Event, EventInput, Lead, LeadInput};
use crate::domain::repositories::ExperienceRepository;
use crate::error::AppError;

const EVENTS_COLLECTION: &str = "events";
const LEADS_COLLECTION: &str = "leads";

/// Page size requested when listing events. Listing is a single call.
const LIST_PAGE_SIZE: u32 = 200;

/// Errors raised while talking to PocketBase.
#[derive(Debug, thiserror::Error)]
pub enum PocketBaseError {
    #[error("invalid PocketBase base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("record store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("record '{id}' not found in '{collection}'")]
    NotFound { collection: &'static str, id: String },

    #[error("record store responded {status}: {message}")]
    Status {
        status: u16,
        message: String,
        data: serde_json::Value,
    },

    #[error("malformed record store response: {0}")]
    Decode(String),
}

impl From<PocketBaseError> for AppError {
    fn from(e: PocketBaseError) -> Self {
        match e {
            PocketBaseError::NotFound { collection, id } => AppError::not_found(
                "Record not found",
                json!({"collection": collection, "id": id}),
            ),
            PocketBaseError::Status {
                status,
                message,
                data,
            } => AppError::upstream(
                format!("record store responded {status}: {message}"),
                json!({"status": status, "data": data}),
            ),
            other => AppError::upstream(other.to_string(), json!({})),
        }
    }
}

/// Repository backed by the PocketBase REST API.
///
/// Holds only immutable configuration: the HTTP client, the store URL, the
/// public files URL and the admin token sent with every request.
pub struct PocketBaseRepository {
    client: Client,
    base_url: Url,
    files_base_url: String,
    admin_token: String,
}

impl PocketBaseRepository {
    /// Creates a repository from configuration.
    ///
    /// When no files URL is configured, file URLs are built from the store
    /// base URL (see [`PocketBaseConfig::files_base_url`]).
    ///
    /// # Errors
    ///
    /// Returns [`PocketBaseError::InvalidBaseUrl`] if the base URL cannot
    /// carry a path, or [`PocketBaseError::Transport`] if the HTTP client
    /// cannot be built.
    pub fn new(config: &PocketBaseConfig, timeout: Duration) -> Result<Self, PocketBaseError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| PocketBaseError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(PocketBaseError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            files_base_url: config.files_base_url().trim_end_matches('/').to_string(),
            admin_token: config.admin_token.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, PocketBaseError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PocketBaseError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn collection_endpoint(&self, collection: &str) -> Result<Url, PocketBaseError> {
        self.endpoint(&["api", "collections", collection, "records"])
    }

    /// URL of a single record.
    ///
    /// Returns `None` for ids that cannot name a record. Empty, `.` and `..`
    /// segments are dropped or resolved by URL path handling and would
    /// address the collection instead.
    fn record_endpoint(&self, collection: &str, id: &str) -> Result<Option<Url>, PocketBaseError> {
        if matches!(id, "" | "." | "..") {
            return Ok(None);
        }

        self.endpoint(&["api", "collections", collection, "records", id])
            .map(Some)
    }

    /// Sends a request and decodes a successful JSON body.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, PocketBaseError> {
        let response = request.bearer_auth(&self.admin_token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            return Err(PocketBaseError::Status {
                status: status.as_u16(),
                message: body.message,
                data: body.data,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PocketBaseError::Decode(e.to_string()))
    }
}

/// Warns when the store holds more events than a single page returned.
fn check_truncation(returned: usize, total_items: u64) -> bool {
    let truncated = total_items > returned as u64;
    if truncated {
        tracing::warn!(
            returned,
            total_items,
            "Event list truncated to a single page"
        );
    }
    truncated
}

/// Counts and logs the outcome of a store operation.
fn observe<T>(
    operation: &'static str,
    result: Result<T, PocketBaseError>,
) -> Result<T, PocketBaseError> {
    match &result {
        Ok(_) => {
            metrics::counter!("pocketbase_requests_total", "operation" => operation, "outcome" => "ok")
                .increment(1);
        }
        Err(PocketBaseError::NotFound { .. }) => {
            metrics::counter!("pocketbase_requests_total", "operation" => operation, "outcome" => "not_found")
                .increment(1);
        }
        Err(e) => {
            metrics::counter!("pocketbase_requests_total", "operation" => operation, "outcome" => "error")
                .increment(1);
            tracing::warn!(operation, error = %e, "Record store call failed");
        }
    }
    result
}

#[async_trait]
impl ExperienceRepository for PocketBaseRepository {
    async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        let result = async {
            let url = self.collection_endpoint(EVENTS_COLLECTION)?;
            let page_size = LIST_PAGE_SIZE.to_string();
            let request = self
                .client
                .get(url)
                .query(&[("sort", "-startDate"), ("perPage", page_size.as_str())]);
            self.execute::<ListResponse<EventRecord>>(request).await
        }
        .await;

        let list = observe("list_events", result)?;
        check_truncation(list.items.len(), list.total_items);
        let mut events = map_events(list.items, &self.files_base_url);
        events.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(events)
    }

    async fn get_event(&self, id: &str) -> Result<Event, AppError> {
        let result = async {
            let not_found = || PocketBaseError::NotFound {
                collection: EVENTS_COLLECTION,
                id: id.to_string(),
            };
            let url = self
                .record_endpoint(EVENTS_COLLECTION, id)?
                .ok_or_else(not_found)?;
            match self.execute::<EventRecord>(self.client.get(url)).await {
                Err(PocketBaseError::Status { status, .. })
                    if status == StatusCode::NOT_FOUND.as_u16() =>
                {
                    Err(not_found())
                }
                other => other,
            }
        }
        .await;

        let record = observe("get_event", result)?;
        Ok(map_event(record, &self.files_base_url))
    }

    async fn create_event(&self, input: EventInput) -> Result<Event, AppError> {
        let result = async {
            let url = self.collection_endpoint(EVENTS_COLLECTION)?;
            let request = self.client.post(url).json(&EventPayload::from(&input));
            self.execute::<EventRecord>(request).await
        }
        .await;

        let record = observe("create_event", result)?;
        Ok(map_event(record, &self.files_base_url))
    }

    async fn create_lead(&self, input: LeadInput) -> Result<Lead, AppError> {
        let result = async {
            let url = self.collection_endpoint(LEADS_COLLECTION)?;
            let request = self.client.post(url).json(&LeadPayload::from(&input));
            self.execute::<LeadRecord>(request).await
        }
        .await;

        let record = observe("create_lead", result)?;
        Ok(map_lead(record))
    }

    async fn health_check(&self) -> bool {
        let Ok(url) = self.endpoint(&["api", "health"]) else {
            return false;
        };

        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "Record store health check failed");
                false
            }
        }
    }
}
