//! `projectdesk projects`: CRUD against the projects REST resource.

use tracing::{info, instrument};
use uuid::Uuid;

use projectdesk_core::domain::{FormProject, Locale, Project, ProjectId, text};

use crate::{
    cli::{FormArgs, ProjectCommands, global::GlobalArgs},
    commands::{confirm, favorites_service, project_service, wants_json},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct projects subcommand.
pub fn execute(
    cmd: ProjectCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ProjectCommands::List { search, format } => {
            let json = wants_json(format, &output);
            list(search.as_deref().unwrap_or(""), json, &config, &output)
        }
        ProjectCommands::Show { id } => show(&parse_id(&id)?, &config, &output),
        ProjectCommands::Create { form, image, id } => create(form, image, id, &config, &output),
        ProjectCommands::Update { id, form, image } => {
            update(&parse_id(&id)?, form, image, &config, &output)
        }
        ProjectCommands::Delete { id, yes } => {
            delete(&parse_id(&id)?, yes || global.quiet, &config, &output)
        }
    }
}

#[instrument(skip_all, fields(query = %query))]
fn list(query: &str, json: bool, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = project_service(config)?;

    let spinner = output.spinner("Fetching projects...");
    let projects = service.search(query);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let projects = projects?;

    if json {
        output.json(&projects)?;
        return Ok(());
    }

    if projects.is_empty() {
        output.info("No projects found")?;
        return Ok(());
    }

    let (open, close) = output.highlight_markers();
    output.header(&format!("Projects ({}):", projects.len()))?;
    for project in &projects {
        output.print(&format!(
            "  {:<10} {}  ({})  {} → {}",
            project.id,
            text::highlight(&project.project_name, query, &open, &close),
            text::highlight(&project.client, query, &open, &close),
            project.start_date,
            project.end_date,
        ))?;
    }
    Ok(())
}

fn show(id: &ProjectId, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let project = project_service(config)?.fetch_by_id(id)?;
    let favorite = favorites_service(config).is_favorite(id.as_str())?;

    output.header(&project.project_name)?;
    for line in describe(&project, favorite, config.locale) {
        output.print(&line)?;
    }
    Ok(())
}

fn create(
    form: FormArgs,
    image: Option<String>,
    id: Option<String>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let id = match id {
        Some(id) => parse_id(&id)?,
        None => parse_id(&Uuid::new_v4().to_string())?,
    };

    let mut draft = form.into_form();
    if let Some(image) = image {
        draft = draft.with_image(image);
    }

    let created = project_service(config)?.create(draft, id)?;
    info!(id = %created.id, "Created project");
    output.success(&format!(
        "Created '{}' with id {}",
        created.project_name, created.id
    ))?;
    Ok(())
}

fn update(
    id: &ProjectId,
    form: FormArgs,
    image: Option<String>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let service = project_service(config)?;
    let existing = service.fetch_by_id(id)?;

    let mut draft = FormProject::from(&existing);
    form.apply_to(&mut draft);
    draft.image = image;

    let updated = service.update(id, &draft)?;
    output.success(&format!("Updated '{}'", updated.project_name))?;
    Ok(())
}

fn delete(id: &ProjectId, yes: bool, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = project_service(config)?;
    // A missing project is reported as not found, before any prompt.
    let project = service.fetch_by_id(id)?;

    if !yes && !confirm(&format!("Delete '{}' ({id})?", project.project_name))? {
        return Err(CliError::Cancelled);
    }

    if service.delete(id) {
        output.success(&format!("Deleted project {id}"))?;
        Ok(())
    } else {
        output.error(&format!("Could not delete project {id}"))?;
        Err(CliError::InvalidInput {
            message: format!("project {id} was not deleted"),
            source: None,
        })
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn parse_id(raw: &str) -> CliResult<ProjectId> {
    ProjectId::new(raw).map_err(|e| CliError::InvalidInput {
        message: format!("invalid project id '{raw}'"),
        source: Some(Box::new(e)),
    })
}

/// Detail lines for `projects show`.
fn describe(project: &Project, favorite: bool, locale: Locale) -> Vec<String> {
    let long = |date: &str| text::format_long_date(date, locale).unwrap_or_else(|| date.into());

    let mut lines = vec![
        format!("  Id:      {}", project.id),
        format!("  Client:  {}", project.client),
        format!("  Start:   {}", long(&project.start_date)),
        format!("  End:     {}", long(&project.end_date)),
    ];
    if project.image.is_some() {
        lines.push("  Image:   yes".into());
    }
    if favorite {
        lines.push("  \u{2605} Favorite".into()); // ★
    }
    lines
}
