use std::sync::Arc;
use std::time::Duration;

use reqwest::RequestBuilder;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::identity::InitDataProvider;
use crate::logs::{LogEntry, LogPatch, NewLog};

/// Header carrying the opaque identity token on every request.
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

/// Thin client for the logs collection.
///
/// Exposes exactly the four operations of the REST surface. None of them
/// retry or touch local state; callers reconcile the in-memory list after a
/// successful mutation. Every request carries the provider's current token
/// and runs under the configured deadline.
pub struct LogsClient {
    http: reqwest::Client,
    base_url: String,
    identity: Arc<dyn InitDataProvider>,
    timeout: Duration,
}

impl LogsClient {
    pub fn new(
        config: &AppConfig,
        identity: Arc<dyn InitDataProvider>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            identity,
            timeout: config.request_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/logs
    pub async fn list(&self) -> Result<Vec<LogEntry>, ApiError> {
        let action = "fetch logs";
        let resp = self
            .send(action, self.http.get(self.url("/api/logs")))
            .await?;
        let entries: Vec<LogEntry> = resp
            .json()
            .await
            .map_err(|source| ApiError::Decode { action, source })?;
        debug!(count = entries.len(), "logs fetched");
        Ok(entries)
    }

    /// POST /api/logs
    pub async fn create(&self, log: &NewLog) -> Result<LogEntry, ApiError> {
        let action = "create log";
        let resp = self
            .send(action, self.http.post(self.url("/api/logs")).json(log))
            .await?;
        let entry: LogEntry = resp
            .json()
            .await
            .map_err(|source| ApiError::Decode { action, source })?;
        debug!(id = %entry.id, "log created");
        Ok(entry)
    }

    /// PATCH /api/logs/{id} with only the changed fields.
    pub async fn update(&self, id: &str, patch: &LogPatch) -> Result<LogEntry, ApiError> {
        let action = "update log";
        let resp = self
            .send(
                action,
                self.http
                    .patch(self.url(&format!("/api/logs/{id}")))
                    .json(patch),
            )
            .await?;
        let entry: LogEntry = resp
            .json()
            .await
            .map_err(|source| ApiError::Decode { action, source })?;
        debug!(id = %entry.id, "log updated");
        Ok(entry)
    }

    /// DELETE /api/logs/{id}
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let action = "delete log";
        self.send(action, self.http.delete(self.url(&format!("/api/logs/{id}"))))
            .await?;
        debug!(%id, "log deleted");
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        action: &'static str,
        req: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = req
            .header(INIT_DATA_HEADER, self.identity.init_data())
            .send()
            .await
            .map_err(|e| self.transport_error(action, e))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .text()
            .await
            .ok()
            .filter(|body| !body.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        Err(ApiError::Status {
            action,
            status: status.as_u16(),
            message,
        })
    }

    fn transport_error(&self, action: &'static str, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                action,
                seconds: self.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ApiError::Connect {
                url: self.base_url.clone(),
                source: e,
            }
        } else {
            ApiError::Transport { action, source: e }
        }
    }
}
