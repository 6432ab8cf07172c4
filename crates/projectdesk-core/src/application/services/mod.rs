//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project" or "toggle a favorite".

pub mod favorites_service;
pub mod project_service;

pub use favorites_service::FavoritesService;
pub use project_service::ProjectService;
