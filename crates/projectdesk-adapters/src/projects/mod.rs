//! Adapters for the `ProjectsApi` port.

mod http;
mod memory;

pub use http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HttpProjectsApi};
pub use memory::InMemoryProjectsApi;
