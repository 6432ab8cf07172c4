//! Draft and error records behind the project form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::project::{Project, ProjectId, ProjectUpdate};

/// The in-progress, unvalidated project data a user is editing.
///
/// Dates are raw `DD/MM/YYYY` text; nothing here has been parsed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProject {
    pub project_name: String,
    pub client: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub existing_image: Option<String>,
}

impl FormProject {
    pub fn new(
        project_name: impl Into<String>,
        client: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            client: client.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            image: None,
            existing_image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Build the record to persist. A new image wins over the existing one.
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            project_name: self.project_name,
            client: self.client,
            start_date: self.start_date,
            end_date: self.end_date,
            image: self.image.or(self.existing_image),
        }
    }

    /// Build a full-replacement update body from this draft.
    pub fn to_update(&self) -> ProjectUpdate {
        ProjectUpdate {
            project_name: Some(self.project_name.clone()),
            client: Some(self.client.clone()),
            start_date: Some(self.start_date.clone()),
            end_date: Some(self.end_date.clone()),
            image: self.image.clone().or_else(|| self.existing_image.clone()),
        }
    }
}

impl From<&Project> for FormProject {
    fn from(project: &Project) -> Self {
        Self {
            project_name: project.project_name.clone(),
            client: project.client.clone(),
            start_date: project.start_date.clone(),
            end_date: project.end_date.clone(),
            image: None,
            existing_image: project.image.clone(),
        }
    }
}

/// The validated fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ProjectName,
    Client,
    StartDate,
    EndDate,
}

impl FormField {
    /// Write order used by the validator.
    pub const ALL: [FormField; 4] = [
        FormField::ProjectName,
        FormField::Client,
        FormField::StartDate,
        FormField::EndDate,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectName => "projectName",
            Self::Client => "client",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message-or-empty string per validated field.
///
/// Invariant: the record is valid iff all four strings are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    pub project_name: String,
    pub client: String,
    pub start_date: String,
    pub end_date: String,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, message)| message.is_empty())
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::ProjectName => &self.project_name,
            FormField::Client => &self.client,
            FormField::StartDate => &self.start_date,
            FormField::EndDate => &self.end_date,
        }
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        let slot = match field {
            FormField::ProjectName => &mut self.project_name,
            FormField::Client => &mut self.client,
            FormField::StartDate => &mut self.start_date,
            FormField::EndDate => &mut self.end_date,
        };
        *slot = message.into();
    }

    /// Every field with its message, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Only the fields that currently carry a message.
    pub fn failing(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.iter().filter(|(_, message)| !message.is_empty())
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.failing() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
