use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Error type used by repository traits.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Field-keyed, user-facing validation messages for one record.
///
/// Keys are field names, values are the messages for that field. Messages
/// are German, matching what the clients already display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when no messages were collected, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Failures a domain operation can report to the boundary.
///
/// Anything else (storage errors and the like) travels as [`BoxError`] and
/// surfaces as an opaque 500.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
}
