//! Infrastructure adapters for ProjectDesk.
//!
//! This crate implements the ports defined in `projectdesk-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod favorites;
pub mod projects;

// Re-export commonly used adapters
pub use favorites::{JsonFileFavoritesStore, MemoryFavoritesStore};
pub use projects::{HttpProjectsApi, InMemoryProjectsApi};
