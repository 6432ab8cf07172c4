pub mod favorites;
pub mod form;
pub mod project;

pub use crate::domain::DomainError;
pub use favorites::Favorites;
pub use form::{FormErrors, FormField, FormProject};
pub use project::{Project, ProjectId, ProjectUpdate};
