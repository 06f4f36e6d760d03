use crate::api::LogsClient;
use crate::error::ApiError;
use crate::logs::LogEntry;

/// Confirmation gate in front of the destructive delete call.
///
/// Holds the candidate entry so the prompt can describe what is about to be
/// removed. `confirm` consumes the gate; dropping it is the cancel path.
/// Delete failures are returned to the caller for display rather than
/// swallowed.
pub struct DeleteConfirm {
    entry: LogEntry,
}

impl DeleteConfirm {
    pub fn new(entry: LogEntry) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> &LogEntry {
        &self.entry
    }

    /// Short description shown in the prompt, e.g. "Pizza, Salad - 500 cal".
    pub fn summary(&self) -> String {
        self.entry.summary()
    }

    pub async fn confirm(self, api: &LogsClient) -> Result<(), ApiError> {
        api.delete(&self.entry.id).await
    }
}
