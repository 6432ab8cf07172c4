//! `projectdesk favorites`: the local favorites list.

use projectdesk_core::domain::{Favorites, ProjectId};

use crate::{
    cli::{FavoriteCommands, global::GlobalArgs},
    commands::{confirm, favorites_service, project_service, wants_json},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct favorites subcommand.
pub fn execute(
    cmd: FavoriteCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = favorites_service(&config);

    match cmd {
        FavoriteCommands::List { format } => {
            let favorites = service.list()?;
            if wants_json(format, &output) {
                output.json(&favorites)?;
            } else {
                render(&favorites, &output)?;
            }
        }

        FavoriteCommands::Toggle { id } => {
            let favorites = service.list()?;

            // Removing needs no network round-trip: the stored copy is enough.
            let project = match favorites.iter().find(|p| p.id.as_str() == id) {
                Some(stored) => stored.clone(),
                None => {
                    let id = ProjectId::new(id.as_str()).map_err(|e| CliError::InvalidInput {
                        message: format!("invalid project id '{id}'"),
                        source: Some(Box::new(e)),
                    })?;
                    project_service(&config)?.fetch_by_id(&id)?
                }
            };

            let name = project.project_name.clone();
            if service.toggle(project)? {
                output.success(&format!("Added '{name}' to favorites"))?;
            } else {
                output.success(&format!("Removed '{name}' from favorites"))?;
            }
        }

        FavoriteCommands::Clear { yes } => {
            if !yes && !global.quiet && !confirm("Remove every favorite?")? {
                return Err(CliError::Cancelled);
            }
            service.clear()?;
            output.success("Favorites cleared")?;
        }

        FavoriteCommands::Count => {
            output.print(&service.count()?.to_string())?;
        }
    }

    Ok(())
}

fn render(favorites: &Favorites, output: &OutputManager) -> CliResult<()> {
    if favorites.is_empty() {
        output.info("No favorites yet")?;
        return Ok(());
    }

    output.header(&format!("Favorites ({}):", favorites.count()))?;
    for project in favorites.iter() {
        output.print(&format!(
            "  \u{2605} {:<10} {}  ({})",
            project.id, project.project_name, project.client
        ))?;
    }
    Ok(())
}
