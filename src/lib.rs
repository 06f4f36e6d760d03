pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod logs;
pub mod ui;

pub use api::LogsClient;
pub use config::AppConfig;
pub use error::ApiError;
