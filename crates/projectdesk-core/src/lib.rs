//! projectdesk Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for projectdesk:
//! project records, client-side form validation, the favorites list, and the
//! ports that infrastructure adapters implement.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         projectdesk-cli (CLI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ProjectService, FavoritesService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (ProjectsApi, FavoritesStore)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   projectdesk-adapters (Infrastructure) │
//! │  (HttpProjectsApi, JsonFileFavorites)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (FormValidator, Favorites, Project)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use projectdesk_core::domain::{FormErrors, FormProject, FormValidator};
//!
//! let draft = FormProject::new("Acme Tower", "Acme Corp", "01/05/2024", "10/05/2024");
//! let mut errors = FormErrors::default();
//!
//! let valid = FormValidator::new(&draft, &mut errors).validate_form();
//! assert!(valid);
//! assert!(errors.is_empty());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FavoritesService, ProjectService,
        ports::{FavoritesStore, ProjectsApi},
    };
    pub use crate::domain::{
        Favorites, FormErrors, FormProject, FormValidator, Locale, Observable, Project,
        ProjectDate, ProjectId, ProjectUpdate,
    };
    pub use crate::error::{DeskError, DeskResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
