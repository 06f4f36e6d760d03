use thiserror::Error;

/// Errors produced by the logs API client.
///
/// Validation failures never reach this type; they are reported as plain
/// message lists next to the form. Everything here crossed (or tried to
/// cross) the network.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is the response
    /// body text, falling back to the canonical status reason.
    #[error("Failed to {action} ({status}): {message}")]
    Status {
        action: &'static str,
        status: u16,
        message: String,
    },

    /// No HTTP response was obtained at all.
    #[error("Cannot connect to backend server at {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The per-request deadline expired.
    #[error("Failed to {action}: request timed out after {seconds}s")]
    Timeout { action: &'static str, seconds: u64 },

    /// Transport failure other than connect/timeout.
    #[error("Failed to {action}: {source}")]
    Transport {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Failed to {action}: invalid response body")]
    Decode {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
