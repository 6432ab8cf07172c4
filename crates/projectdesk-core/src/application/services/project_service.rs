//! Project Service - CRUD orchestration over the projects API.
//!
//! Every write goes through the form validator first:
//! 1. Validate the draft
//! 2. Refuse with `InvalidForm` if any field failed
//! 3. Call the port

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ProjectsApi},
    domain::{FormErrors, FormProject, FormValidator, Locale, Project, ProjectId},
    error::DeskResult,
};

/// Service for project CRUD.
pub struct ProjectService {
    api: Box<dyn ProjectsApi>,
    locale: Locale,
}

impl ProjectService {
    /// Create a new project service backed by the given API adapter.
    pub fn new(api: Box<dyn ProjectsApi>) -> Self {
        Self {
            api,
            locale: Locale::default(),
        }
    }

    /// Use `locale` for validation messages.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// List all projects.
    pub fn list(&self) -> DeskResult<Vec<Project>> {
        let projects = self.api.list()?;
        debug!(count = projects.len(), "Projects listed");
        Ok(projects)
    }

    /// Projects whose name or client contains `query`, ignoring case.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> DeskResult<Vec<Project>> {
        let needle = query.to_lowercase();
        let projects = self.list()?;
        if needle.is_empty() {
            return Ok(projects);
        }

        Ok(projects
            .into_iter()
            .filter(|p| {
                p.project_name.to_lowercase().contains(&needle)
                    || p.client.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Fetch a project, failing with `ProjectNotFound` if absent.
    #[instrument(skip_all, fields(id = %id))]
    pub fn fetch_by_id(&self, id: &ProjectId) -> DeskResult<Project> {
        self.api.get(id)?.ok_or_else(|| {
            ApplicationError::ProjectNotFound {
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Validate a draft into a fresh error record.
    pub fn validate(&self, form: &FormProject) -> FormErrors {
        let mut errors = FormErrors::default();
        let valid = FormValidator::new(form, &mut errors)
            .with_locale(self.locale)
            .validate_form();

        debug!(
            valid,
            failing = errors.failing().count(),
            locale = %self.locale,
            "Form validated"
        );
        errors
    }

    /// Validate and create a project under `id`.
    #[instrument(skip_all, fields(id = %id))]
    pub fn create(&self, form: FormProject, id: ProjectId) -> DeskResult<Project> {
        self.ensure_valid(&form)?;

        let project = form.into_project(id);
        let created = self.api.create(&project)?;
        info!(name = %created.project_name, "Project created");
        Ok(created)
    }

    /// Validate and update an existing project.
    #[instrument(skip_all, fields(id = %id))]
    pub fn update(&self, id: &ProjectId, form: &FormProject) -> DeskResult<Project> {
        self.ensure_valid(form)?;

        let updated = self.api.update(id, &form.to_update())?;
        info!(name = %updated.project_name, "Project updated");
        Ok(updated)
    }

    /// Delete a project. Failures are logged and reported as `false`.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&self, id: &ProjectId) -> bool {
        match self.api.delete(id) {
            Ok(()) => {
                info!("Project deleted");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete project");
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_valid(&self, form: &FormProject) -> DeskResult<()> {
        let errors = self.validate(form);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::InvalidForm { errors }.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockProjectsApi;
    use crate::error::DeskError;

    fn acme(id: &str) -> Project {
        Project {
            id: ProjectId::new(id).unwrap(),
            project_name: "Acme Tower".into(),
            client: "Acme Corp".into(),
            start_date: "01/05/2024".into(),
            end_date: "10/05/2024".into(),
            image: None,
        }
    }

    fn valid_form() -> FormProject {
        FormProject::new("Acme Tower", "Acme Corp", "01/05/2024", "10/05/2024")
    }

    #[test]
    fn create_sends_valid_form() {
        let mut api = MockProjectsApi::new();
        api.expect_create()
            .withf(|p| p.id.as_str() == "1" && p.project_name == "Acme Tower")
            .times(1)
            .returning(|p| Ok(p.clone()));

        let service = ProjectService::new(Box::new(api));
        let created = service
            .create(valid_form(), ProjectId::new("1").unwrap())
            .unwrap();

        assert_eq!(created, acme("1"));
    }

    #[test]
    fn create_refuses_invalid_form_without_calling_api() {
        let mut api = MockProjectsApi::new();
        api.expect_create().never();

        let service = ProjectService::new(Box::new(api));
        let form = FormProject::new("Acme", "Acme Corp", "10/05/2024", "01/05/2024");
        let err = service
            .create(form, ProjectId::new("1").unwrap())
            .unwrap_err();

        match err {
            DeskError::Application(ApplicationError::InvalidForm { errors }) => {
                assert_eq!(errors.project_name, "Please enter at least two words");
                assert_eq!(errors.end_date, "End date cannot be earlier than start date");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn update_sends_full_body() {
        let mut api = MockProjectsApi::new();
        api.expect_update()
            .withf(|id, update| {
                id.as_str() == "3" && update.client.as_deref() == Some("Acme Corp")
            })
            .times(1)
            .returning(|id, update| {
                let mut project = acme(id.as_str());
                update.apply_to(&mut project);
                Ok(project)
            });

        let service = ProjectService::new(Box::new(api));
        let updated = service
            .update(&ProjectId::new("3").unwrap(), &valid_form())
            .unwrap();
        assert_eq!(updated.id.as_str(), "3");
    }

    #[test]
    fn fetch_missing_project_is_not_found() {
        let mut api = MockProjectsApi::new();
        api.expect_get().returning(|_| Ok(None));

        let service = ProjectService::new(Box::new(api));
        let err = service
            .fetch_by_id(&ProjectId::new("404").unwrap())
            .unwrap_err();

        assert!(matches!(
            err,
            DeskError::Application(ApplicationError::ProjectNotFound { ref id }) if id == "404"
        ));
    }

    #[test]
    fn delete_reports_failure_as_false() {
        let mut api = MockProjectsApi::new();
        api.expect_delete().returning(|_| {
            Err(ApplicationError::Transport {
                reason: "connection refused".into(),
            }
            .into())
        });

        let service = ProjectService::new(Box::new(api));
        assert!(!service.delete(&ProjectId::new("1").unwrap()));
    }

    #[test]
    fn delete_reports_success_as_true() {
        let mut api = MockProjectsApi::new();
        api.expect_delete().times(1).returning(|_| Ok(()));

        let service = ProjectService::new(Box::new(api));
        assert!(service.delete(&ProjectId::new("1").unwrap()));
    }

    #[test]
    fn search_matches_name_or_client_case_insensitively() {
        let mut api = MockProjectsApi::new();
        api.expect_list().returning(|| {
            let mut other = acme("2");
            other.project_name = "Harbor Bridge".into();
            other.client = "Initech".into();
            Ok(vec![acme("1"), other])
        });

        let service = ProjectService::new(Box::new(api));
        let ids = |ps: Vec<Project>| ps.into_iter().map(|p| p.id.to_string()).collect::<Vec<_>>();

        assert_eq!(ids(service.search("TOWER").unwrap()), ["1"]);
        assert_eq!(ids(service.search("initech").unwrap()), ["2"]);
        assert_eq!(service.search("").unwrap().len(), 2);
    }

    #[test]
    fn validate_uses_service_locale() {
        let service = ProjectService::new(Box::new(MockProjectsApi::new())).with_locale(Locale::PtBr);
        let errors = service.validate(&FormProject::default());
        assert_eq!(errors.project_name, "Nome do projeto é obrigatório");
    }
}
