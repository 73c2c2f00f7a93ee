//! PocketBase record store adapter.
//!
//! Translates domain operations into calls against the PocketBase REST API
//! and maps wire records back into domain entities:
//!
//! - `GET  {base}/api/collections/events/records?sort=-startDate`
//! - `GET  {base}/api/collections/events/records/{id}`
//! - `POST {base}/api/collections/events/records`
//! - `POST {base}/api/collections/leads/records`
//!
//! Attached files are exposed as `{files_base}/api/files/{collection}/{id}/{filename}`.

pub mod records;
mod repository;

pub use repository::{PocketBaseError, PocketBaseRepository};
