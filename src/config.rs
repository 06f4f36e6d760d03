use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origin of the logs API, e.g. "http://localhost:8080".
    pub api_base_url: String,
    /// Deadline applied to every request; an expired deadline is reported
    /// as a timeout error instead of leaving a submission hanging forever.
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".into());
        let request_timeout = Duration::from_secs(
            std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(10),
        );
        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}
