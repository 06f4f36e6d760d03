//! In-process fake of the logs backend, used by the integration tests.
#![allow(dead_code)] // each test crate uses a different subset

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch};
use axum::{Json, Router};
use time::OffsetDateTime;
use uuid::Uuid;

use calog::api::INIT_DATA_HEADER;
use calog::identity::StaticInitData;
use calog::logs::{LogEntry, LogPatch, NewLog};
use calog::{AppConfig, LogsClient};

#[derive(Clone, Default)]
pub struct Backend {
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
    /// When set, requests must carry exactly this init-data token.
    pub required_token: Option<String>,
    /// Raw body of the most recent PATCH, for asserting what was sent.
    pub last_patch: Arc<Mutex<Option<serde_json::Value>>>,
    /// Artificial delay before answering list calls.
    pub list_delay: Option<Duration>,
}

impl Backend {
    pub fn requiring_token(token: &str) -> Self {
        Self {
            required_token: Some(token.to_string()),
            ..Self::default()
        }
    }
}

fn authorize(state: &Backend, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    if let Some(required) = &state.required_token {
        let supplied = headers
            .get(INIT_DATA_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if supplied != required {
            return Err((
                StatusCode::UNAUTHORIZED,
                "Unauthorized: invalid init data".to_string(),
            ));
        }
    }
    Ok(())
}

async fn list_logs(
    State(state): State<Backend>,
    headers: HeaderMap,
) -> Result<Json<Vec<LogEntry>>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    if let Some(delay) = state.list_delay {
        tokio::time::sleep(delay).await;
    }
    Ok(Json(state.logs.lock().unwrap().clone()))
}

async fn create_log(
    State(state): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<NewLog>,
) -> Result<(StatusCode, Json<LogEntry>), (StatusCode, String)> {
    authorize(&state, &headers)?;
    let now = OffsetDateTime::now_utc();
    let entry = LogEntry {
        id: Uuid::new_v4().to_string(),
        user_id: 7,
        food_items: body.food_items,
        calories: body.calories,
        confidence: body.confidence,
        timestamp: body.timestamp.unwrap_or(now),
        created_at: now,
        updated_at: now,
    };
    state.logs.lock().unwrap().push(entry.clone());
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_log(
    State(state): State<Backend>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(raw): Json<serde_json::Value>,
) -> Result<Json<LogEntry>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    *state.last_patch.lock().unwrap() = Some(raw.clone());
    let patch: LogPatch =
        serde_json::from_value(raw).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut logs = state.logs.lock().unwrap();
    let entry = logs
        .iter_mut()
        .find(|l| l.id == id)
        .ok_or((StatusCode::NOT_FOUND, "Log not found".to_string()))?;
    if let Some(items) = patch.food_items {
        entry.food_items = items;
    }
    if let Some(calories) = patch.calories {
        entry.calories = calories;
    }
    if let Some(confidence) = patch.confidence {
        entry.confidence = confidence;
    }
    if let Some(timestamp) = patch.timestamp {
        entry.timestamp = timestamp;
    }
    entry.updated_at = OffsetDateTime::now_utc();
    Ok(Json(entry.clone()))
}

async fn delete_log(
    State(state): State<Backend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, String)> {
    authorize(&state, &headers)?;
    let mut logs = state.logs.lock().unwrap();
    let before = logs.len();
    logs.retain(|l| l.id != id);
    if logs.len() == before {
        return Err((StatusCode::NOT_FOUND, "Log not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Starts the fake backend on an ephemeral port and returns its base URL.
pub async fn spawn(backend: Backend) -> String {
    let router = Router::new()
        .route("/api/logs", get(list_logs).post(create_log))
        .route("/api/logs/:id", patch(update_log).delete(delete_log))
        .with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fake backend");
    });
    format!("http://{addr}")
}

/// Base URL of a port where nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn client(base_url: &str, token: &str) -> LogsClient {
    client_with_timeout(base_url, token, Duration::from_secs(5))
}

pub fn client_with_timeout(base_url: &str, token: &str, timeout: Duration) -> LogsClient {
    let config = AppConfig {
        api_base_url: base_url.to_string(),
        request_timeout: timeout,
    };
    LogsClient::new(&config, Arc::new(StaticInitData(token.to_string())))
        .expect("client builds")
}
