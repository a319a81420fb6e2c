//! Error types for the SACTIFI site

use thiserror::Error;

use crate::form::FormField;

/// Main error type for site state operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// A selection panel was built from an empty item list
    #[error("Selection requires at least one item")]
    EmptySelection,

    /// Two items in a selection share the same identity
    #[error("Duplicate item id in selection: {0}")]
    DuplicateId(String),

    /// A category filter was built without any categories
    #[error("Category filter requires at least one category")]
    NoCategories,

    /// The site configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons a contact submission cannot start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more required fields are empty
    #[error("Missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<FormField>),

    /// A submission is already in flight
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// The send itself failed
    #[error("Send failed: {0}")]
    Send(#[from] SendError),
}

/// Failures reported by a contact sender
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The request never reached the receiving side
    #[error("Network error: {0}")]
    Network(String),

    /// The receiving side rejected the submission's contents
    #[error("Validation error: {0}")]
    Validation(String),

    /// The receiving side failed while handling the submission
    #[error("Server error: {0}")]
    Server(String),
}

impl SendError {
    /// Whether resubmitting the same draft can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SendError::Network(_) | SendError::Server(_))
    }
}

fn format_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for site operations
pub type SiteResult<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_labels() {
        let err = FormError::MissingFields(vec![FormField::Email, FormField::Message]);
        assert_eq!(err.to_string(), "Missing required fields: Email, Message");
    }

    #[test]
    fn retryable_send_errors() {
        assert!(SendError::Network("offline".into()).is_retryable());
        assert!(SendError::Server("500".into()).is_retryable());
        assert!(!SendError::Validation("bad email".into()).is_retryable());
    }
}
