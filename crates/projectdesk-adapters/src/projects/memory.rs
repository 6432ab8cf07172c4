//! In-memory projects resource for testing and offline use.

use std::sync::{Arc, RwLock};

use projectdesk_core::{
    application::{ApplicationError, ports::ProjectsApi},
    domain::{Project, ProjectId, ProjectUpdate},
    error::DeskResult,
};

/// Thread-safe in-memory `ProjectsApi`.
///
/// Keeps insertion order, like the REST resource does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectsApi {
    inner: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectsApi {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `projects`.
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(projects.into_iter().collect())),
        }
    }

    /// Get the number of projects.
    pub fn len(&self) -> usize {
        self.inner.read().map(|p| p.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProjectsApi for InMemoryProjectsApi {
    fn list(&self) -> DeskResult<Vec<Project>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }

    fn get(&self, id: &ProjectId) -> DeskResult<Option<Project>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.iter().find(|p| &p.id == id).cloned())
    }

    fn create(&self, project: &Project) -> DeskResult<Project> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.iter().any(|p| p.id == project.id) {
            return Err(ApplicationError::Transport {
                reason: format!("project '{}' already exists", project.id),
            }
            .into());
        }

        inner.push(project.clone());
        Ok(project.clone())
    }

    fn update(&self, id: &ProjectId, update: &ProjectUpdate) -> DeskResult<Project> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let project = inner
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| ApplicationError::ProjectNotFound { id: id.to_string() })?;

        update.apply_to(project);
        Ok(project.clone())
    }

    fn delete(&self, id: &ProjectId) -> DeskResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let index = inner
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| ApplicationError::ProjectNotFound { id: id.to_string() })?;

        inner.remove(index);
        Ok(())
    }
}
