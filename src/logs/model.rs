use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

/// How certain the calorie figure is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            _ => Err("confidence must be one of: high, medium, low".into()),
        }
    }
}

/// One calorie-log record as the server returns it.
///
/// `id` is opaque and immutable for the entry's lifetime; `user_id` and the
/// bookkeeping timestamps are server-assigned and never client-writable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub user_id: i64,
    pub food_items: Vec<String>,
    pub calories: i64,
    pub confidence: Confidence,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl LogEntry {
    /// One-line description shown in the delete confirmation gate,
    /// e.g. "Pizza, Salad - 500 cal".
    pub fn summary(&self) -> String {
        format!("{} - {} cal", self.food_items.join(", "), self.calories)
    }
}

/// Body of a create call. The server assigns id and bookkeeping timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLog {
    pub food_items: Vec<String>,
    pub calories: i64,
    pub confidence: Confidence,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub timestamp: Option<OffsetDateTime>,
}

/// Partial update; absent fields are omitted from the JSON body entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPatch {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub food_items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub calories: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub confidence: Option<Confidence>,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub timestamp: Option<OffsetDateTime>,
}
