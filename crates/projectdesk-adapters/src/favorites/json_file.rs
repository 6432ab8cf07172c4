//! Favorites persisted as a JSON array of projects on the local disk.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use projectdesk_core::{
    application::{ApplicationError, ports::FavoritesStore},
    domain::Favorites,
    error::{DeskError, DeskResult},
};

/// Production favorites store backed by a single JSON file.
///
/// A missing file loads as an empty list. Parent directories are created
/// on the first save.
#[derive(Debug, Clone)]
pub struct JsonFileFavoritesStore {
    path: PathBuf,
}

impl JsonFileFavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFileFavoritesStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> DeskResult<Favorites> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No favorites file yet");
                return Ok(Favorites::new());
            }
            Err(e) => return Err(map_io_error(&self.path, e, "read file")),
        };

        if content.trim().is_empty() {
            return Ok(Favorites::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            ApplicationError::Persistence {
                path: self.path.clone(),
                reason: format!("Invalid favorites JSON: {}", e),
            }
            .into()
        })
    }

    #[instrument(skip_all, fields(path = %self.path.display(), count = favorites.count()))]
    fn save(&self, favorites: &Favorites) -> DeskResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, e, "create directory"))?;
            }
        }

        let json = serde_json::to_string_pretty(favorites).map_err(|e| {
            DeskError::from(ApplicationError::Persistence {
                path: self.path.clone(),
                reason: format!("Failed to serialize favorites: {}", e),
            })
        })?;

        std::fs::write(&self.path, json).map_err(|e| map_io_error(&self.path, e, "write file"))?;
        debug!("Favorites saved");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> DeskError {
    ApplicationError::Persistence {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
