//! Application layer for projectdesk.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService, FavoritesService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Validation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{FavoritesService, ProjectService};

pub use ports::{FavoritesStore, ProjectsApi};

pub use error::ApplicationError;
