//! Favorites Service - load, change, save.

use tracing::{debug, info};

use crate::{
    application::ports::FavoritesStore,
    domain::{Favorites, Project},
    error::DeskResult,
};

/// Service for the local favorites list.
pub struct FavoritesService {
    store: Box<dyn FavoritesStore>,
}

impl FavoritesService {
    pub fn new(store: Box<dyn FavoritesStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> DeskResult<Favorites> {
        self.store.load()
    }

    /// Add or remove `project`. Returns `true` if it is now a favorite.
    pub fn toggle(&self, project: Project) -> DeskResult<bool> {
        let mut favorites = self.store.load()?;
        let id = project.id.clone();
        let added = favorites.toggle(project);
        self.store.save(&favorites)?;

        info!(id = %id, added, count = favorites.count(), "Favorite toggled");
        Ok(added)
    }

    pub fn clear(&self) -> DeskResult<()> {
        self.store.save(&Favorites::new())?;
        debug!("Favorites cleared");
        Ok(())
    }

    pub fn is_favorite(&self, id: &str) -> DeskResult<bool> {
        Ok(self.store.load()?.is_favorite(id))
    }

    pub fn count(&self) -> DeskResult<usize> {
        Ok(self.store.load()?.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFavoritesStore;
    use crate::domain::ProjectId;

    fn project(id: &str) -> Project {
        Project {
            id: ProjectId::new(id).unwrap(),
            project_name: "Acme Tower".into(),
            client: "Acme Corp".into(),
            start_date: "01/05/2024".into(),
            end_date: "10/05/2024".into(),
            image: None,
        }
    }

    #[test]
    fn toggle_saves_updated_list() {
        let mut store = MockFavoritesStore::new();
        store.expect_load().returning(|| Ok(Favorites::new()));
        store
            .expect_save()
            .withf(|f| f.count() == 1 && f.is_favorite("1"))
            .times(1)
            .returning(|_| Ok(()));

        let service = FavoritesService::new(Box::new(store));
        assert!(service.toggle(project("1")).unwrap());
    }

    #[test]
    fn toggle_existing_removes_it() {
        let mut store = MockFavoritesStore::new();
        store
            .expect_load()
            .returning(|| Ok([project("1")].into_iter().collect()));
        store
            .expect_save()
            .withf(|f| f.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let service = FavoritesService::new(Box::new(store));
        assert!(!service.toggle(project("1")).unwrap());
    }

    #[test]
    fn clear_saves_empty_list_without_loading() {
        let mut store = MockFavoritesStore::new();
        store.expect_load().never();
        store
            .expect_save()
            .withf(|f| f.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        FavoritesService::new(Box::new(store)).clear().unwrap();
    }

    #[test]
    fn queries_read_through_store() {
        let mut store = MockFavoritesStore::new();
        store
            .expect_load()
            .returning(|| Ok([project("1"), project("2")].into_iter().collect()));

        let service = FavoritesService::new(Box::new(store));
        assert_eq!(service.count().unwrap(), 2);
        assert!(service.is_favorite("2").unwrap());
        assert!(!service.is_favorite("3").unwrap());
    }
}
