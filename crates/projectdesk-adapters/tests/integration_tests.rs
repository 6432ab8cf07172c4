//! Services wired to the real adapters.

use projectdesk_adapters::{InMemoryProjectsApi, JsonFileFavoritesStore};
use projectdesk_core::prelude::*;
use tempfile::TempDir;

fn valid_form() -> FormProject {
    FormProject::new("Acme Tower", "Acme Corp", "01/05/2024", "10/05/2024")
}

#[test]
fn test_project_lifecycle_in_memory() {
    let api = InMemoryProjectsApi::new();
    let service = ProjectService::new(Box::new(api.clone()));
    let id = ProjectId::new("p-1").unwrap();

    let created = service.create(valid_form(), id.clone()).unwrap();
    assert_eq!(created.project_name, "Acme Tower");
    assert_eq!(api.len(), 1);

    let mut edit = FormProject::from(&created);
    edit.client = "Initech".into();
    let updated = service.update(&id, &edit).unwrap();
    assert_eq!(updated.client, "Initech");
    assert_eq!(service.fetch_by_id(&id).unwrap().client, "Initech");

    assert!(service.delete(&id));
    assert!(!service.delete(&id));
    assert!(api.is_empty());
}

#[test]
fn test_invalid_update_leaves_store_untouched() {
    let api = InMemoryProjectsApi::new();
    let service = ProjectService::new(Box::new(api.clone()));
    let id = ProjectId::new("p-1").unwrap();
    service.create(valid_form(), id.clone()).unwrap();

    let mut edit = valid_form();
    edit.end_date = "30/04/2024".into();
    let err = service.update(&id, &edit).unwrap_err();

    assert_eq!(err.category(), projectdesk_core::error::ErrorCategory::Validation);
    assert_eq!(service.fetch_by_id(&id).unwrap().end_date, "10/05/2024");
}

#[test]
fn test_favorites_survive_a_new_store_instance() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    let project = valid_form().into_project(ProjectId::new("p-1").unwrap());

    let first = FavoritesService::new(Box::new(JsonFileFavoritesStore::new(&path)));
    assert!(first.toggle(project.clone()).unwrap());

    let second = FavoritesService::new(Box::new(JsonFileFavoritesStore::new(&path)));
    assert!(second.is_favorite("p-1").unwrap());
    assert_eq!(second.count().unwrap(), 1);

    assert!(!second.toggle(project).unwrap());
    assert_eq!(first.count().unwrap(), 0);
}

#[test]
fn test_clear_empties_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    let service = FavoritesService::new(Box::new(JsonFileFavoritesStore::new(&path)));

    for id in ["a", "b", "c"] {
        service
            .toggle(valid_form().into_project(ProjectId::new(id).unwrap()))
            .unwrap();
    }
    assert_eq!(service.count().unwrap(), 3);

    service.clear().unwrap();
    assert_eq!(service.count().unwrap(), 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
}
