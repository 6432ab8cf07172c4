//! The persisted `Project` record and its identifier.
//!
//! Field names serialize in camelCase because the REST resource speaks that
//! dialect (`projectName`, `startDate`, ...).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::domain::error::DomainError;

/// Identifier assigned to a project by the REST resource.
///
/// Invariant: never empty or whitespace-only. Enforced at construction.
///
/// Numeric ids on the wire (`"id": 1`) are read as their decimal text and
/// written back as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyProjectId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Text(String),
            Number(i64),
        }

        let raw = match WireId::deserialize(deserializer)? {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        };
        Self::new(raw).map_err(de::Error::custom)
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A project as stored by the REST resource.
///
/// Dates are kept as the `DD/MM/YYYY` text the resource stores; use
/// [`crate::domain::ProjectDate`] to compare them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub project_name: String,
    pub client: String,
    pub start_date: String,
    pub end_date: String,
    /// Opaque image reference (usually a data URL). Never inspected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Partial update body for `PUT <base>/<id>`.
///
/// Absent fields are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProjectUpdate {
    /// Apply this update on top of an existing project.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.project_name {
            project.project_name = name.clone();
        }
        if let Some(client) = &self.client {
            project.client = client.clone();
        }
        if let Some(start) = &self.start_date {
            project.start_date = start.clone();
        }
        if let Some(end) = &self.end_date {
            project.end_date = end.clone();
        }
        if let Some(image) = &self.image {
            project.image = Some(image.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
