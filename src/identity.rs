/// Source of the opaque Telegram init-data token attached to every API call.
///
/// The hosting environment owns token issuance; the client only forwards
/// whatever string is available. An empty string means "no token" and the
/// server decides whether to accept a dev fallback.
pub trait InitDataProvider: Send + Sync {
    fn init_data(&self) -> String;
}

/// Reads the token from the `TELEGRAM_INIT_DATA` environment variable.
pub struct EnvInitData;

impl InitDataProvider for EnvInitData {
    fn init_data(&self) -> String {
        std::env::var("TELEGRAM_INIT_DATA").unwrap_or_default()
    }
}

/// Fixed token, mainly for tests and scripted use.
pub struct StaticInitData(pub String);

impl InitDataProvider for StaticInitData {
    fn init_data(&self) -> String {
        self.0.clone()
    }
}
