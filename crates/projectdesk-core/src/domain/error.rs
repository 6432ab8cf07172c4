// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::validation::ValidationFailure;

/// Root domain error type.
///
/// Form validation never produces these: a failing field is reported as a
/// message in `FormErrors`. `DomainError` covers construction of typed values
/// (ids, dates, locales) from untrusted text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Project id cannot be empty")]
    EmptyProjectId,

    #[error("Invalid date '{value}': {failure}")]
    InvalidDate {
        value: String,
        failure: ValidationFailure,
    },

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectId => vec!["Pass the id shown by `projectdesk projects list`".into()],
            Self::InvalidDate { value, .. } => vec![
                format!("'{}' is not a usable date", value),
                "Dates use the DD/MM/YYYY format, e.g. 15/06/2024".into(),
            ],
            Self::UnknownLocale(_) => vec!["Supported locales: en, pt-br".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
