//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `projectdesk-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProjectsApi`: CRUD on the REST projects resource
//!   - `FavoritesStore`: Local favorites persistence

pub mod output;

pub use output::{FavoritesStore, ProjectsApi};

#[cfg(test)]
pub use output::{MockFavoritesStore, MockProjectsApi};
