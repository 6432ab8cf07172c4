//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the ports, not
//! field validation. A failing form surfaces here only as `InvalidForm`,
//! carrying the filled error record.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::FormErrors;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The form did not pass validation; nothing was sent.
    #[error("Project form is invalid: {errors}")]
    InvalidForm { errors: FormErrors },

    /// The REST resource has no project with this id.
    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    /// The REST resource could not be reached or answered with an error.
    #[error("Projects API request failed: {reason}")]
    Transport { reason: String },

    /// The favorites file could not be read or written.
    #[error("Favorites storage error at {path}: {reason}")]
    Persistence { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidForm { errors } => {
                let mut out: Vec<String> = errors
                    .failing()
                    .map(|(field, message)| format!("{field}: {message}"))
                    .collect();
                out.push("Fix the fields above and submit again".into());
                out
            }
            Self::ProjectNotFound { id } => vec![
                format!("No project with id '{}'", id),
                "List available projects: projectdesk projects list".into(),
            ],
            Self::Transport { .. } => vec![
                "Check that the projects API is running".into(),
                "Check api.base_url: projectdesk config get api.base_url".into(),
            ],
            Self::Persistence { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check file permissions".into(),
                "Delete the file to start with an empty favorites list".into(),
            ],
            Self::StoreLockError => vec![
                "The store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidForm { .. } => ErrorCategory::Validation,
            Self::ProjectNotFound { .. } => ErrorCategory::NotFound,
            Self::Transport { .. } => ErrorCategory::Unavailable,
            Self::Persistence { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_form_suggestions_list_failing_fields() {
        let err = ApplicationError::InvalidForm {
            errors: FormErrors {
                client: "Please enter at least one word".into(),
                ..Default::default()
            },
        };
        let suggestions = err.suggestions();
        assert_eq!(suggestions[0], "client: Please enter at least one word");
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn not_found_category() {
        let err = ApplicationError::ProjectNotFound { id: "9".into() };
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
