pub mod app;
pub mod confirm;
pub mod form;

pub use app::{App, ViewState};
pub use confirm::DeleteConfirm;
pub use form::{EntryForm, FormMode, Submission};
