use tracing::{error, info};

use crate::api::LogsClient;
use crate::error::ApiError;
use crate::logs::LogEntry;
use crate::ui::confirm::DeleteConfirm;

/// Mutually exclusive view states; loading takes priority, then error, then
/// the ready list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready,
}

/// Root controller. Owns the authoritative in-memory list of entries.
///
/// Every successful mutation is followed by `reload`, which re-fetches and
/// wholesale-replaces the list; there is no merge or optimistic patching.
/// A load failure clears the list so no stale data is rendered alongside the
/// error.
pub struct App {
    api: LogsClient,
    entries: Vec<LogEntry>,
    state: ViewState,
}

impl App {
    pub fn new(api: LogsClient) -> Self {
        Self {
            api,
            entries: Vec::new(),
            state: ViewState::Loading,
        }
    }

    pub fn api(&self) -> &LogsClient {
        &self.api
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Entries for rendering; meaningful only in the `Ready` state.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn find_entry(&self, id: &str) -> Option<&LogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Fetches the full list, replacing whatever was held before.
    pub async fn load(&mut self) {
        self.state = ViewState::Loading;
        match self.api.list().await {
            Ok(entries) => {
                info!(count = entries.len(), "log list loaded");
                self.entries = entries;
                self.state = ViewState::Ready;
            }
            Err(e) => {
                error!(error = %e, "log list load failed");
                self.entries.clear();
                self.state = ViewState::Error(e.to_string());
            }
        }
    }

    /// Re-fetch after a successful mutation.
    pub async fn reload(&mut self) {
        self.load().await;
    }

    /// Runs the confirmation gate's delete and reloads on success.
    /// The error, if any, is surfaced to the caller.
    pub async fn delete_entry(&mut self, gate: DeleteConfirm) -> Result<(), ApiError> {
        gate.confirm(&self.api).await?;
        self.reload().await;
        Ok(())
    }
}
