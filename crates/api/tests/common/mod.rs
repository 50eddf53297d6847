#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anthology_api::config::ServerConfig;
use anthology_api::router::build_app_router;
use anthology_api::state::AppState;
use anthology_core::types::DbId;
use anthology_db::models::{
    CreateEmailSubscriber, CreateReflection, CreateSessionRequest, CreateVolume, EmailSubscriber,
    Reflection, SessionRequest, Volume,
};
use anthology_db::{AnthologyStore, MemStore, StoreError};
use anthology_events::{LogNotifier, Notification, Notifier, NotifyError};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_sample_data: false,
    }
}

/// Build the full application router over `store`, with the log notifier.
///
/// Goes through the same [`build_app_router`] as `main.rs`, so tests
/// exercise the production middleware stack.
pub fn build_test_app(store: Arc<dyn AnthologyStore>) -> Router {
    build_app_with_notifier(store, Arc::new(LogNotifier))
}

pub fn build_app_with_notifier(
    store: Arc<dyn AnthologyStore>,
    notifier: Arc<dyn Notifier>,
) -> Router {
    let state = AppState { store, notifier };
    build_app_router(state, &test_config())
}

/// A fresh, empty store.
pub fn empty_store() -> Arc<dyn AnthologyStore> {
    Arc::new(MemStore::new())
}

/// A store whose backend is gone.
pub fn failing_store() -> Arc<dyn AnthologyStore> {
    Arc::new(FailingStore)
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// Every call fails with [`StoreError::Unavailable`].
pub struct FailingStore;

/// Backend detail that must never reach a response body.
pub const STORE_FAILURE_DETAIL: &str = "connection reset by peer";

fn unavailable<T>() -> Result<T, StoreError> {
    Err(StoreError::Unavailable(STORE_FAILURE_DETAIL.to_string()))
}

#[async_trait]
impl AnthologyStore for FailingStore {
    async fn list_volumes(&self) -> Result<Vec<Volume>, StoreError> {
        unavailable()
    }

    async fn get_current_volume(&self) -> Result<Option<Volume>, StoreError> {
        unavailable()
    }

    async fn get_volume(&self, _id: DbId) -> Result<Option<Volume>, StoreError> {
        unavailable()
    }

    async fn create_volume(&self, _input: CreateVolume) -> Result<Volume, StoreError> {
        unavailable()
    }

    async fn list_reflections(&self) -> Result<Vec<Reflection>, StoreError> {
        unavailable()
    }

    async fn create_reflection(&self, _input: CreateReflection) -> Result<Reflection, StoreError> {
        unavailable()
    }

    async fn list_session_requests(&self) -> Result<Vec<SessionRequest>, StoreError> {
        unavailable()
    }

    async fn create_session_request(
        &self,
        _input: CreateSessionRequest,
    ) -> Result<SessionRequest, StoreError> {
        unavailable()
    }

    async fn list_email_subscribers(&self) -> Result<Vec<EmailSubscriber>, StoreError> {
        unavailable()
    }

    async fn create_email_subscriber(
        &self,
        _input: CreateEmailSubscriber,
    ) -> Result<EmailSubscriber, StoreError> {
        unavailable()
    }

    async fn subscribe_if_absent(
        &self,
        _input: CreateEmailSubscriber,
    ) -> Result<Option<EmailSubscriber>, StoreError> {
        unavailable()
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        unavailable()
    }
}

// ---------------------------------------------------------------------------
// Notifiers
// ---------------------------------------------------------------------------

/// Records the kind of every notification it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    pub kinds: Mutex<Vec<&'static str>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.kinds.lock().unwrap().push(notification.kind());
        Ok(())
    }
}

/// Fails every delivery.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Err(NotifyError::Delivery("mailer offline".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
