use serde::{Deserialize, Serialize};

use crate::domain::entities::project::Project;

/// Locally kept list of favorite projects.
///
/// Invariant: at most one entry per project id; insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    projects: Vec<Project>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the project if absent, remove it if present.
    ///
    /// Returns `true` when the project is a favorite afterwards.
    pub fn toggle(&mut self, project: Project) -> bool {
        match self.position(project.id.as_str()) {
            Some(index) => {
                self.projects.remove(index);
                false
            }
            None => {
                self.projects.push(project);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.projects.clear();
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn count(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id.as_str() == id)
    }
}

impl FromIterator<Project> for Favorites {
    fn from_iter<I: IntoIterator<Item = Project>>(iter: I) -> Self {
        let mut favorites = Self::new();
        for project in iter {
            if !favorites.is_favorite(project.id.as_str()) {
                favorites.projects.push(project);
            }
        }
        favorites
    }
}
