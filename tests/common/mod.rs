#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use thunder_events::application::services::{AuthService, ExperienceService, UserService};
use thunder_events::config::{KeycloakConfig, PocketBaseConfig};
use thunder_events::domain::entities::{User, UserUpdate};
use thunder_events::domain::repositories::UserRepository;
use thunder_events::error::AppError;
use thunder_events::infrastructure::keycloak::KeycloakIntrospector;
use thunder_events::infrastructure::pocketbase::PocketBaseRepository;
use thunder_events::state::{AppState, UsersState};

pub const ADMIN_TOKEN: &str = "pb-admin-token";
pub const VALID_TOKEN: &str = "valid-token";
pub const INACTIVE_TOKEN: &str = "expired-token";
pub const REALM: &str = "thunder";
pub const CLIENT_ID: &str = "thunder-api";
pub const CLIENT_SECRET: &str = "s3cret";

/// Serves a router on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Returns a base URL nothing listens on.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// In-memory stand-in for the PocketBase REST API.
#[derive(Default)]
pub struct FakePocketBase {
    events: Mutex<Vec<Value>>,
    leads: Mutex<Vec<Value>>,
    next_id: AtomicUsize,
    pub calls: AtomicUsize,
    pub failing: AtomicBool,
    pub last_query: Mutex<Option<String>>,
}

impl FakePocketBase {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<Value> {
        self.events.lock().unwrap().clone()
    }

    pub fn leads(&self) -> Vec<Value> {
        self.leads.lock().unwrap().clone()
    }

    /// Stores an event record as PocketBase would return it.
    pub fn seed_event(&self, id: &str, title: &str, start_date: &str, files: &[&str]) {
        let (primary, gallery) = match files.split_first() {
            Some((first, rest)) => (first.to_string(), rest.to_vec()),
            None => (String::new(), vec![]),
        };

        self.events.lock().unwrap().push(json!({
            "id": id,
            "collectionId": "pbc_1687431684",
            "collectionName": "events",
            "slug": title.to_lowercase().replace(' ', "-"),
            "title": title,
            "subtitle": "",
            "description": null,
            "location": "Lisbon",
            "venue": "",
            "status": "published",
            "startDate": start_date,
            "endDate": start_date,
            "primaryImage": primary,
            "gallery": gallery,
            "tags": null,
            "created": "2025-01-01 10:00:00.000Z",
            "updated": "2025-01-01 10:00:00.000Z"
        }));
    }

    fn new_id(&self) -> String {
        format!("rec{:012}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn router(self: &Arc<Self>) -> Router {
        Router::new()
            .route("/api/health", get(pb_health))
            .route(
                "/api/collections/events/records",
                get(pb_list_events).post(pb_create_event),
            )
            .route("/api/collections/events/records/{id}", get(pb_get_event))
            .route("/api/collections/leads/records", post(pb_create_lead))
            .with_state(self.clone())
    }
}

fn pb_error(status: StatusCode, message: &str, data: Value) -> Response {
    (
        status,
        Json(json!({"code": status.as_u16(), "message": message, "data": data})),
    )
        .into_response()
}

/// Counts the call and applies admin token and failure checks.
fn pb_guard(pb: &FakePocketBase, headers: &HeaderMap) -> Option<Response> {
    pb.calls.fetch_add(1, Ordering::SeqCst);

    if pb.failing.load(Ordering::SeqCst) {
        return Some(pb_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong while processing your request.",
            json!({}),
        ));
    }

    let expected = format!("Bearer {ADMIN_TOKEN}");
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);

    if !authorized {
        return Some(pb_error(
            StatusCode::FORBIDDEN,
            "Only superusers can perform this action.",
            json!({}),
        ));
    }

    None
}

async fn pb_health(State(pb): State<Arc<FakePocketBase>>) -> Response {
    if pb.failing.load(Ordering::SeqCst) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(json!({"code": 200, "message": "API is healthy.", "data": {}})).into_response()
}

async fn pb_list_events(
    State(pb): State<Arc<FakePocketBase>>,
    headers: HeaderMap,
    uri: axum::http::Uri,
) -> Response {
    if let Some(rejection) = pb_guard(&pb, &headers) {
        return rejection;
    }
    *pb.last_query.lock().unwrap() = uri.query().map(str::to_string);

    // Insertion order on purpose: callers must sort.
    let items = pb.events.lock().unwrap().clone();
    Json(json!({
        "page": 1,
        "perPage": 200,
        "totalItems": items.len(),
        "totalPages": 1,
        "items": items
    }))
    .into_response()
}

async fn pb_get_event(
    State(pb): State<Arc<FakePocketBase>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Some(rejection) = pb_guard(&pb, &headers) {
        return rejection;
    }

    let found = pb
        .events
        .lock()
        .unwrap()
        .iter()
        .find(|e| e["id"] == id.as_str())
        .cloned();

    match found {
        Some(record) => Json(record).into_response(),
        None => pb_error(
            StatusCode::NOT_FOUND,
            "The requested resource wasn't found.",
            json!({}),
        ),
    }
}

async fn pb_create_event(
    State(pb): State<Arc<FakePocketBase>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Some(rejection) = pb_guard(&pb, &headers) {
        return rejection;
    }

    let Ok(Value::Object(mut record)) = serde_json::from_slice::<Value>(&body) else {
        return pb_error(StatusCode::BAD_REQUEST, "Failed to load the submitted data.", json!({}));
    };

    if record.get("title").and_then(Value::as_str).unwrap_or_default().is_empty() {
        return pb_error(
            StatusCode::BAD_REQUEST,
            "Failed to create record.",
            json!({"title": {"code": "validation_required", "message": "Cannot be blank."}}),
        );
    }

    record.insert("id".into(), json!(pb.new_id()));
    record.insert("collectionId".into(), json!("pbc_1687431684"));
    record.insert("collectionName".into(), json!("events"));
    record.insert("created".into(), json!("2025-03-01 12:00:00.000Z"));
    record.insert("updated".into(), json!("2025-03-01 12:00:00.000Z"));
    let record = Value::Object(record);

    pb.events.lock().unwrap().push(record.clone());
    Json(record).into_response()
}

async fn pb_create_lead(
    State(pb): State<Arc<FakePocketBase>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Some(rejection) = pb_guard(&pb, &headers) {
        return rejection;
    }

    let Ok(Value::Object(mut record)) = serde_json::from_slice::<Value>(&body) else {
        return pb_error(StatusCode::BAD_REQUEST, "Failed to load the submitted data.", json!({}));
    };

    record.insert("id".into(), json!(pb.new_id()));
    record.insert("collectionId".into(), json!("pbc_3572739349"));
    record.insert("collectionName".into(), json!("leads"));
    record.insert("created".into(), json!("2025-03-01 12:00:00.000Z"));
    record.insert("updated".into(), json!("2025-03-01 12:00:00.000Z"));
    let record = Value::Object(record);

    pb.leads.lock().unwrap().push(record.clone());
    Json(record).into_response()
}

/// Stand-in for the Keycloak introspection endpoint.
///
/// [`VALID_TOKEN`] is active, [`INACTIVE_TOKEN`] is reported inactive and
/// any other token is unknown (inactive).
#[derive(Default)]
pub struct FakeKeycloak {
    pub calls: AtomicUsize,
    pub failing: AtomicBool,
}

impl FakeKeycloak {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn router(self: &Arc<Self>) -> Router {
        Router::new()
            .route(
                "/realms/{realm}/protocol/openid-connect/token/introspect",
                post(kc_introspect),
            )
            .with_state(self.clone())
    }
}

async fn kc_introspect(
    State(kc): State<Arc<FakeKeycloak>>,
    Path(realm): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    kc.calls.fetch_add(1, Ordering::SeqCst);

    if kc.failing.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    if realm != REALM || !headers.contains_key(AUTHORIZATION) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid_client"})),
        )
            .into_response();
    }

    let form: HashMap<String, String> = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();

    match form.get("token").map(String::as_str) {
        Some(VALID_TOKEN) => Json(json!({
            "active": true,
            "sub": "5b8f0c1e-user",
            "preferred_username": "alice",
            "token_type": "Bearer"
        }))
        .into_response(),
        _ => Json(json!({"active": false})).into_response(),
    }
}

pub fn keycloak_config(base_url: &str) -> KeycloakConfig {
    KeycloakConfig {
        base_url: base_url.to_string(),
        realm: REALM.to_string(),
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
    }
}

pub fn pocketbase_config(base_url: &str, files_base_url: Option<&str>) -> PocketBaseConfig {
    PocketBaseConfig {
        base_url: base_url.to_string(),
        admin_token: ADMIN_TOKEN.to_string(),
        files_base_url: files_base_url.map(str::to_string),
    }
}

pub fn auth_service(keycloak_url: &str) -> Arc<AuthService> {
    let introspector =
        KeycloakIntrospector::new(&keycloak_config(keycloak_url), Duration::from_secs(5)).unwrap();
    Arc::new(AuthService::new(Arc::new(introspector)))
}

/// Events API state wired to fake upstreams.
pub struct TestEnv {
    pub pocketbase: Arc<FakePocketBase>,
    pub keycloak: Arc<FakeKeycloak>,
    pub pocketbase_url: String,
    pub state: AppState,
}

pub async fn setup() -> TestEnv {
    setup_with_files_url(None).await
}

pub async fn setup_with_files_url(files_base_url: Option<&str>) -> TestEnv {
    let pocketbase = Arc::new(FakePocketBase::default());
    let keycloak = Arc::new(FakeKeycloak::default());

    let pocketbase_url = spawn(pocketbase.router()).await;
    let keycloak_url = spawn(keycloak.router()).await;

    let state = create_test_state(&pocketbase_url, files_base_url, &keycloak_url);

    TestEnv {
        pocketbase,
        keycloak,
        pocketbase_url,
        state,
    }
}

pub fn create_test_state(
    pocketbase_url: &str,
    files_base_url: Option<&str>,
    keycloak_url: &str,
) -> AppState {
    let repository = PocketBaseRepository::new(
        &pocketbase_config(pocketbase_url, files_base_url),
        Duration::from_secs(5),
    )
    .unwrap();

    AppState::new(
        Arc::new(ExperienceService::new(Arc::new(repository))),
        auth_service(keycloak_url),
    )
}

/// Users table kept in memory.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<i64, User>>,
    pub failing: AtomicBool,
}

impl InMemoryUsers {
    pub fn with_user(self, id: i64, name: &str, email: &str) -> Self {
        self.users.lock().unwrap().insert(
            id,
            User {
                id,
                name: name.to_string(),
                email: email.to_string(),
            },
        );
        self
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.check()?;
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, AppError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(&id).map(|user| {
            user.name = update.name;
            user.email = update.email;
            user.clone()
        }))
    }
}

/// Users API state backed by [`InMemoryUsers`] and a fake Keycloak.
pub async fn setup_users(users: InMemoryUsers) -> (UsersState, Arc<FakeKeycloak>, Arc<InMemoryUsers>) {
    let keycloak = Arc::new(FakeKeycloak::default());
    let keycloak_url = spawn(keycloak.router()).await;

    let users = Arc::new(users);
    let state = UsersState::new(
        Arc::new(UserService::new(users.clone())),
        auth_service(&keycloak_url),
    );

    (state, keycloak, users)
}
