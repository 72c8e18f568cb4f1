//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Minimum number of characters accepted for a prompt
pub const MIN_PROMPT_CHARS: usize = 10;

/// Message shown for any unexpected failure after validation passed
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate prompt. Please try again.";

/// User-correctable form problems, checked in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a prompt to enhance.")]
    EmptyPrompt,

    #[error("Please enter a more detailed prompt (at least {min} characters).")]
    PromptTooShort { min: usize },

    #[error("Please select a prompt category.")]
    MissingCategory,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Message safe to show to an end user.
    ///
    /// Validation problems keep their own wording; everything else collapses
    /// into the generic failure message.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Validation(e) => e.to_string(),
            DomainError::NotFound { .. } => "No prompt data found.".to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::EmptyPrompt.to_string(),
            "Please enter a prompt to enhance."
        );
        assert_eq!(
            ValidationError::PromptTooShort {
                min: MIN_PROMPT_CHARS
            }
            .to_string(),
            "Please enter a more detailed prompt (at least 10 characters)."
        );
        assert_eq!(
            ValidationError::MissingCategory.to_string(),
            "Please select a prompt category."
        );
    }

    #[test]
    fn test_user_message_hides_internal_errors() {
        let err = DomainError::Repository("disk full".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);

        let err = DomainError::from(ValidationError::MissingCategory);
        assert_eq!(err.user_message(), "Please select a prompt category.");
    }
}
