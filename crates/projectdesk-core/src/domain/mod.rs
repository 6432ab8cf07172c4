//! Core domain layer for projectdesk.
//!
//! This module contains pure business logic. All I/O (HTTP, disk) is handled
//! via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Rich domain model**: Behavior lives in entities, not services
//!
pub mod entities;
pub mod error;
pub mod observable;
pub mod text;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    favorites::Favorites,
    form::{FormErrors, FormField, FormProject},
    project::{Project, ProjectId, ProjectUpdate},
};

pub use error::{DomainError, ErrorCategory};

pub use observable::{FormSink, FormSource, Observable};

pub use validation::{FormValidator, MessageCatalog, ValidationFailure};

pub use value_objects::{Locale, ProjectDate};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn acme() -> Project {
        Project {
            id: ProjectId::new("1").unwrap(),
            project_name: "Acme Tower".into(),
            client: "Acme Corp".into(),
            start_date: "01/05/2024".into(),
            end_date: "10/05/2024".into(),
            image: None,
        }
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn locale_parses_correctly() {
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert_eq!(Locale::from_str("pt-BR").unwrap(), Locale::PtBr);
        assert_eq!(Locale::from_str("pt_br").unwrap(), Locale::PtBr);
        assert!(Locale::from_str("fr").is_err());
    }

    #[test]
    fn project_date_orders_by_calendar() {
        let early = ProjectDate::from_str("31/01/2025").unwrap();
        let late = ProjectDate::from_str("01/02/2025").unwrap();

        // "31/..." > "01/..." as strings, but not as dates.
        assert!(early < late);
    }

    #[test]
    fn project_date_rejects_nonexistent_days() {
        assert!(ProjectDate::from_str("31/04/2024").is_err());
        assert!(ProjectDate::from_str("2024-04-01").is_err());
    }

    // ========================================================================
    // Entity Tests
    // ========================================================================

    #[test]
    fn project_id_rejects_blank() {
        assert!(ProjectId::new("   ").is_err());
        assert_eq!(ProjectId::new("42").unwrap().as_str(), "42");
    }

    #[test]
    fn project_round_trips_through_form() {
        let project = acme();
        let form = FormProject::from(&project);

        assert_eq!(form.project_name, "Acme Tower");
        assert_eq!(form.existing_image, None);
        assert_eq!(form.into_project(project.id.clone()), project);
    }

    #[test]
    fn project_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(acme()).unwrap();

        assert_eq!(json["projectName"], "Acme Tower");
        assert_eq!(json["startDate"], "01/05/2024");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn favorites_toggle_adds_then_removes() {
        let mut favorites = Favorites::default();

        assert!(favorites.toggle(acme()));
        assert!(favorites.is_favorite("1"));
        assert_eq!(favorites.count(), 1);

        assert!(!favorites.toggle(acme()));
        assert!(!favorites.is_favorite("1"));
        assert_eq!(favorites.count(), 0);
    }
}
