pub mod model;
pub mod validation;

pub use model::{Confidence, LogEntry, LogPatch, NewLog};
pub use validation::{validate_entry, ValidatedLog};
