//! Fake upstream for integration tests
//!
//! One axum router plays both the homework status API and the Telegram Bot API.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

pub const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";
pub const API_TOKEN: &str = "test-token";
pub const BOT_TOKEN: &str = "123:abc";
pub const CHAT_ID: &str = "42";

/// Request seen by the fake status endpoint
#[derive(Debug, Clone)]
pub struct StatusRequest {
    pub authorization: Option<String>,
    pub from_date: Option<String>,
}

/// Message seen by the fake `sendMessage` endpoint
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub bot_segment: String,
    pub body: Value,
}

#[derive(Clone)]
pub struct FakeUpstream {
    api_status: StatusCode,
    api_body: String,
    api_delay: Duration,
    chat_status: StatusCode,
    chat_body: Value,
    status_requests: Arc<Mutex<Vec<StatusRequest>>>,
    chat_requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self {
            api_status: StatusCode::OK,
            api_body: json!({"homeworks": [], "current_date": 0}).to_string(),
            api_delay: Duration::ZERO,
            chat_status: StatusCode::OK,
            chat_body: json!({"ok": true, "result": {"message_id": 1}}),
            status_requests: Arc::new(Mutex::new(Vec::new())),
            chat_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_api_response(mut self, status: StatusCode, body: impl Into<String>) -> Self {
        self.api_status = status;
        self.api_body = body.into();
        self
    }

    pub fn with_api_delay(mut self, delay: Duration) -> Self {
        self.api_delay = delay;
        self
    }

    pub fn with_chat_response(mut self, status: StatusCode, body: Value) -> Self {
        self.chat_status = status;
        self.chat_body = body;
        self
    }

    pub fn status_requests(&self) -> Vec<StatusRequest> {
        self.status_requests.lock().unwrap().clone()
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.chat_requests()
            .into_iter()
            .filter_map(|r| r.body["text"].as_str().map(str::to_string))
            .collect()
    }

    /// Serve on an ephemeral port and return the base URL
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route(STATUSES_PATH, get(homework_statuses))
            .route("/:bot_segment/sendMessage", post(send_message))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }
}

async fn homework_statuses(
    State(fake): State<FakeUpstream>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    fake.status_requests.lock().unwrap().push(StatusRequest {
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        from_date: query.get("from_date").cloned(),
    });

    if !fake.api_delay.is_zero() {
        tokio::time::sleep(fake.api_delay).await;
    }

    (fake.api_status, fake.api_body.clone())
}

async fn send_message(
    State(fake): State<FakeUpstream>,
    Path(bot_segment): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    fake.chat_requests
        .lock()
        .unwrap()
        .push(ChatRequest { bot_segment, body });

    (fake.chat_status, Json(fake.chat_body.clone()))
}
