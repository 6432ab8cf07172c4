//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and render the results.
//! No business logic lives here.

use std::time::Duration;

use projectdesk_adapters::{HttpProjectsApi, JsonFileFavoritesStore};
use projectdesk_core::{
    application::{FavoritesService, ProjectService},
    domain::FormProject,
};
use tracing::debug;

use crate::{
    cli::{FormArgs, OutputFormat, RecordFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod favorites;
pub mod init;
pub mod projects;
pub mod validate;

/// Project service over the configured HTTP resource.
pub(crate) fn project_service(config: &AppConfig) -> CliResult<ProjectService> {
    debug!(url = %config.api.base_url, timeout = config.api.timeout_secs, "Using projects API");
    let api = HttpProjectsApi::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )?;
    Ok(ProjectService::new(Box::new(api)).with_locale(config.locale))
}

/// Favorites service over the configured JSON file.
pub(crate) fn favorites_service(config: &AppConfig) -> FavoritesService {
    debug!(path = %config.favorites.path.display(), "Using favorites file");
    FavoritesService::new(Box::new(JsonFileFavoritesStore::new(
        config.favorites.path.clone(),
    )))
}

impl FormArgs {
    /// Draft with every missing field left empty.
    pub(crate) fn into_form(self) -> FormProject {
        FormProject::new(
            self.name.unwrap_or_default(),
            self.client.unwrap_or_default(),
            self.start.unwrap_or_default(),
            self.end.unwrap_or_default(),
        )
    }

    /// Overwrite the fields that were given on the command line.
    pub(crate) fn apply_to(self, form: &mut FormProject) {
        if let Some(name) = self.name {
            form.project_name = name;
        }
        if let Some(client) = self.client {
            form.client = client;
        }
        if let Some(start) = self.start {
            form.start_date = start;
        }
        if let Some(end) = self.end {
            form.end_date = end;
        }
    }
}

/// JSON when asked for on the command or globally.
pub(crate) fn wants_json(format: Option<RecordFormat>, output: &OutputManager) -> bool {
    match format {
        Some(RecordFormat::Json) => true,
        Some(RecordFormat::Table) => false,
        None => output.format() == OutputFormat::Json,
    }
}

/// Ask before a destructive action.
#[cfg(feature = "interactive")]
pub(crate) fn confirm(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e.to_string()),
        })
}

/// Ask before a destructive action.
#[cfg(not(feature = "interactive"))]
pub(crate) fn confirm(prompt: &str) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("{prompt} [y/N] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}
