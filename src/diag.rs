//! Diagnostics sink for failures the stores swallow.
//!
//! The collapsed store surface converts every datastore failure into an
//! absence sentinel, so the error itself only survives through this sink.
//! Stores default to [`TracingDiagnostics`]; tests inject
//! [`RecordingDiagnostics`] and assert on the captured events instead of
//! scraping a global output stream.

use std::sync::Mutex;

use crate::error::StoreError;

pub trait Diagnostics: Send + Sync {
    /// Called once for every failure a collapsed store operation swallows.
    fn store_error(&self, operation: &'static str, error: &StoreError);
}

/// Default sink: structured `tracing` error events.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn store_error(&self, operation: &'static str, error: &StoreError) {
        tracing::error!(operation, error = %error, "store operation failed");
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub operation: &'static str,
    pub message: String,
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnostics {
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|e| e.operation).collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn store_error(&self, operation: &'static str, error: &StoreError) {
        self.events.lock().unwrap().push(DiagnosticEvent {
            operation,
            message: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_events_in_order() {
        let diag = RecordingDiagnostics::default();
        diag.store_error("register_account", &StoreError::from(sqlx::Error::RowNotFound));
        diag.store_error("get_account_by_email", &StoreError::from(sqlx::Error::RowNotFound));

        assert_eq!(diag.operations(), vec!["register_account", "get_account_by_email"]);
        assert!(diag.events()[0].message.starts_with("Database error:"));
    }
}
