use time::OffsetDateTime;
use tracing::debug;

use crate::api::LogsClient;
use crate::logs::{validate_entry, Confidence, LogEntry, LogPatch, NewLog};

/// Whether the form creates a fresh entry or edits an existing one.
#[derive(Debug, Clone)]
pub enum FormMode {
    Create,
    Edit(LogEntry),
}

/// Result of a submission attempt.
///
/// `Rejected` covers both local validation failures and API errors; the
/// messages are available via [`EntryForm::errors`] and the form stays open
/// for correction.
#[derive(Debug)]
pub enum Submission {
    Saved(LogEntry),
    Rejected,
}

/// State machine behind the create/edit dialog.
///
/// Raw field text is kept as entered; validation runs only on submit.
/// Successful saves reset the form to a blank create state. The caller is
/// expected to reload the entry list before dismissing the form, so the list
/// always reflects the mutation.
pub struct EntryForm {
    mode: FormMode,
    pub food_items_text: String,
    pub calories_text: String,
    pub confidence: Confidence,
    errors: Vec<String>,
    submitting: bool,
}

impl EntryForm {
    pub fn create() -> Self {
        let mut form = Self {
            mode: FormMode::Create,
            food_items_text: String::new(),
            calories_text: String::new(),
            confidence: Confidence::Medium,
            errors: Vec::new(),
            submitting: false,
        };
        form.set_mode(FormMode::Create);
        form
    }

    pub fn edit(entry: LogEntry) -> Self {
        let mut form = Self::create();
        form.set_mode(FormMode::Edit(entry));
        form
    }

    /// Switches mode and re-runs field population: edit mode copies the
    /// entry's values into the raw fields, create mode clears them.
    pub fn set_mode(&mut self, mode: FormMode) {
        match &mode {
            FormMode::Create => {
                self.food_items_text.clear();
                self.calories_text.clear();
                self.confidence = Confidence::Medium;
            }
            FormMode::Edit(entry) => {
                self.food_items_text = entry.food_items.join(", ");
                self.calories_text = entry.calories.to_string();
                self.confidence = entry.confidence;
            }
        }
        self.errors.clear();
        self.mode = mode;
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates and submits the form.
    ///
    /// Create mode POSTs a new entry stamped with the current UTC time; edit
    /// mode PATCHes exactly the editable fields (food items, calories,
    /// confidence), never the timestamp or identity fields. Re-entrant calls
    /// while a submission is in flight are rejected without side effects.
    pub async fn submit(&mut self, api: &LogsClient) -> Submission {
        if self.submitting {
            return Submission::Rejected;
        }
        self.errors.clear();

        let validated = match validate_entry(&self.food_items_text, &self.calories_text) {
            Ok(v) => v,
            Err(violations) => {
                debug!(count = violations.len(), "submission rejected by validation");
                self.errors = violations;
                return Submission::Rejected;
            }
        };

        self.submitting = true;
        let result = match &self.mode {
            FormMode::Create => {
                let log = NewLog {
                    food_items: validated.food_items,
                    calories: validated.calories,
                    confidence: self.confidence,
                    timestamp: Some(OffsetDateTime::now_utc()),
                };
                api.create(&log).await
            }
            FormMode::Edit(entry) => {
                let patch = LogPatch {
                    food_items: Some(validated.food_items),
                    calories: Some(validated.calories),
                    confidence: Some(self.confidence),
                    timestamp: None,
                };
                api.update(&entry.id, &patch).await
            }
        };
        self.submitting = false;

        match result {
            Ok(saved) => {
                self.set_mode(FormMode::Create);
                Submission::Saved(saved)
            }
            Err(e) => {
                self.errors = vec![e.to_string()];
                Submission::Rejected
            }
        }
    }
}
