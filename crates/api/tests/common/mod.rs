#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use hamo_db::models::{Item, Quiz, RecipientRequest, Theme};
use hamo_db::{DbConfig, ExhibitStore, StoreError};
use http_body_util::BodyExt;
use tower::ServiceExt;

use hamo_api::config::ServerConfig;
use hamo_api::router::build_app_router;
use hamo_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        db: DbConfig::default(),
        secrets: None,
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// on top of the given store.
pub fn build_test_app(store: Arc<dyn ExhibitStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

/// In-memory [`ExhibitStore`] honouring the same ordering contract as the
/// MySQL store.
#[derive(Default)]
pub struct FakeStore {
    pub themes: Vec<Theme>,
    pub items: Vec<Item>,
    pub quizzes: Vec<Quiz>,
    pub recipients: Mutex<Vec<RecipientRequest>>,
    /// When set, every call fails with this message.
    pub failure: Option<String>,
    pub calls: AtomicUsize,
}

impl FakeStore {
    pub fn seeded() -> Self {
        Self {
            themes: vec![
                theme("T1", "Joseon Ceramics", ""),
                theme("T2", "Bronze Age", "Tools and ornaments"),
            ],
            // Stored out of order; the store contract sorts them.
            items: vec![
                item("T1", 3, "Moon Jar"),
                item("T1", 1, "Celadon Vase"),
                item("T1", 2, "Buncheong Bowl"),
            ],
            quizzes: vec![
                quiz("T1", 2, "What colour is the moon jar?"),
                quiz("T1", 1, "Which glaze is green?"),
            ],
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn recorded_recipients(&self) -> Vec<RecipientRequest> {
        self.recipients.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ExhibitStore for FakeStore {
    async fn get_all_themes(&self) -> Result<Vec<Theme>, StoreError> {
        self.enter()?;
        Ok(self.themes.clone())
    }

    async fn get_items_by_theme(&self, theme_id: &str) -> Result<Vec<Item>, StoreError> {
        self.enter()?;
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|i| i.theme_id == theme_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.item_seq);
        Ok(items)
    }

    async fn get_quizzes_by_theme(&self, theme_id: &str) -> Result<Vec<Quiz>, StoreError> {
        self.enter()?;
        let mut quizzes: Vec<Quiz> = self
            .quizzes
            .iter()
            .filter(|q| q.theme_id == theme_id)
            .cloned()
            .collect();
        quizzes.sort_by_key(|q| q.quiz_no);
        Ok(quizzes)
    }

    async fn add_recipient(&self, input: &RecipientRequest) -> Result<(), StoreError> {
        self.enter()?;
        self.recipients.lock().unwrap().push(input.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.enter()
    }
}

/// A store that fails the test if anything reaches it.
pub struct UntouchableStore;

#[async_trait]
impl ExhibitStore for UntouchableStore {
    async fn get_all_themes(&self) -> Result<Vec<Theme>, StoreError> {
        panic!("store must not be called")
    }

    async fn get_items_by_theme(&self, _theme_id: &str) -> Result<Vec<Item>, StoreError> {
        panic!("store must not be called")
    }

    async fn get_quizzes_by_theme(&self, _theme_id: &str) -> Result<Vec<Quiz>, StoreError> {
        panic!("store must not be called")
    }

    async fn add_recipient(&self, _input: &RecipientRequest) -> Result<(), StoreError> {
        panic!("store must not be called")
    }

    async fn ping(&self) -> Result<(), StoreError> {
        panic!("store must not be called")
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn theme(id: &str, name: &str, desc: &str) -> Theme {
    Theme {
        theme_id: id.to_string(),
        theme_name: name.to_string(),
        theme_desc: desc.to_string(),
    }
}

pub fn item(theme_id: &str, seq: i32, name: &str) -> Item {
    Item {
        theme_id: theme_id.to_string(),
        item_seq: seq,
        item_name: name.to_string(),
        item_desc: String::new(),
        script_child: format!("{name} for children"),
        script_general: format!("{name} for everyone"),
        latitude: 37.5,
        longitude: 126.9,
    }
}

pub fn quiz(theme_id: &str, no: i32, question: &str) -> Quiz {
    Quiz {
        theme_id: theme_id.to_string(),
        quiz_no: no,
        question: question.to_string(),
        answer: "answer".to_string(),
        options: r#"["a","b"]"#.to_string(),
        quiz_desc: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string())).await
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
