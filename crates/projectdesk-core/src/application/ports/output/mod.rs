//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `projectdesk-adapters` crate provides implementations.

use crate::domain::{Favorites, Project, ProjectId, ProjectUpdate};
use crate::error::DeskResult;

/// Port for the REST projects resource.
///
/// Implemented by:
/// - `projectdesk_adapters::projects::HttpProjectsApi` (production)
/// - `projectdesk_adapters::projects::InMemoryProjectsApi` (testing / offline)
///
/// ## Design Notes
///
/// - Synchronous; the CLI does one request at a time
/// - No retries: a failed request surfaces as `ApplicationError::Transport`
#[cfg_attr(test, mockall::automock)]
pub trait ProjectsApi: Send + Sync {
    /// Fetch every project.
    fn list(&self) -> DeskResult<Vec<Project>>;

    /// Fetch one project; `Ok(None)` when the resource has no such id.
    fn get(&self, id: &ProjectId) -> DeskResult<Option<Project>>;

    /// Store a new project and return it as stored.
    fn create(&self, project: &Project) -> DeskResult<Project>;

    /// Apply a partial update and return the stored result.
    fn update(&self, id: &ProjectId, update: &ProjectUpdate) -> DeskResult<Project>;

    /// Remove a project.
    fn delete(&self, id: &ProjectId) -> DeskResult<()>;
}

/// Port for the locally kept favorites list.
///
/// Implemented by:
/// - `projectdesk_adapters::favorites::JsonFileFavoritesStore` (production)
/// - `projectdesk_adapters::favorites::MemoryFavoritesStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait FavoritesStore: Send + Sync {
    /// Load the list; a store that was never written loads as empty.
    fn load(&self) -> DeskResult<Favorites>;

    /// Replace the stored list.
    fn save(&self, favorites: &Favorites) -> DeskResult<()>;
}
