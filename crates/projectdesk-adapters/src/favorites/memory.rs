//! In-memory favorites store for testing.

use std::sync::{Arc, RwLock};

use projectdesk_core::{
    application::{ApplicationError, ports::FavoritesStore},
    domain::Favorites,
    error::DeskResult,
};

/// In-memory favorites store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFavoritesStore {
    inner: Arc<RwLock<Favorites>>,
}

impl MemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current list, or `None` if the lock is poisoned (testing helper).
    pub fn snapshot(&self) -> Option<Favorites> {
        self.inner.read().ok().map(|f| f.clone())
    }
}

impl FavoritesStore for MemoryFavoritesStore {
    fn load(&self) -> DeskResult<Favorites> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }

    fn save(&self, favorites: &Favorites) -> DeskResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = favorites.clone();
        Ok(())
    }
}
