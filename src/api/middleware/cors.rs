//! CORS policy for browser clients.

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Preflight responses may be cached this long.
const MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Creates the CORS layer from configured origins.
///
/// A `*` entry allows any origin. Otherwise only the listed origins are
/// allowed; entries that are not valid header values are skipped.
///
/// Allowed methods are `GET`, `POST`, `PUT` and `OPTIONS`; allowed headers
/// are `Origin`, `Content-Type`, `Accept` and `Authorization`.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .max_age(MAX_AGE);

    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}
