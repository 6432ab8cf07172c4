//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "projectdesk",
    bin_name = "projectdesk",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Project records with form validation and local favorites",
    long_about = "ProjectDesk validates project forms, manages projects on a \
                  REST resource and keeps a local list of favorites.",
    after_help = "EXAMPLES:\n\
        \x20 projectdesk validate --name \"Acme Tower\" --client Acme --start 01/05/2024 --end 10/05/2024\n\
        \x20 projectdesk projects list --search tower\n\
        \x20 projectdesk favorites toggle 3\n\
        \x20 projectdesk completions bash > /usr/share/bash-completion/completions/projectdesk",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a project form without sending it anywhere.
    #[command(
        visible_alias = "check",
        about = "Validate a project form",
        after_help = "EXAMPLES:\n\
            \x20 projectdesk validate --name \"Acme Tower\" --client Acme --start 01/05/2024 --end 10/05/2024\n\
            \x20 projectdesk validate --name Acme --format json\n\
            \x20 projectdesk --locale pt-br validate --start 31/04/2024"
    )]
    Validate(ValidateArgs),

    /// Manage projects on the REST resource.
    #[command(
        visible_alias = "p",
        about = "Manage projects",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 projectdesk projects list\n\
            \x20 projectdesk projects show 3\n\
            \x20 projectdesk projects delete 3 --yes"
    )]
    Projects(ProjectCommands),

    /// Manage the local favorites list.
    #[command(
        visible_alias = "fav",
        about = "Manage favorites",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 projectdesk favorites list\n\
            \x20 projectdesk favorites toggle 3\n\
            \x20 projectdesk favorites count"
    )]
    Favorites(FavoriteCommands),

    /// Initialise a ProjectDesk configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 projectdesk init           # default location\n\
            \x20 projectdesk init --local   # .projectdesk.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 projectdesk completions bash > ~/.local/share/bash-completion/completions/projectdesk\n\
            \x20 projectdesk completions zsh  > ~/.zfunc/_projectdesk\n\
            \x20 projectdesk completions fish > ~/.config/fish/completions/projectdesk.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the ProjectDesk configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 projectdesk config get api.base_url\n\
            \x20 projectdesk config list"
    )]
    Config(ConfigCommands),
}

// ── form fields ───────────────────────────────────────────────────────────────

/// The four validated form fields.
///
/// Missing fields are validated as empty strings.
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// Project name (at least two words).
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(long = "client", value_name = "CLIENT", help = "Client name")]
    pub client: Option<String>,

    #[arg(
        short = 's',
        long = "start",
        value_name = "DD/MM/YYYY",
        help = "Start date"
    )]
    pub start: Option<String>,

    #[arg(
        short = 'e',
        long = "end",
        value_name = "DD/MM/YYYY",
        help = "End date"
    )]
    pub end: Option<String>,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `projectdesk validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Output format.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<RecordFormat>,
}

/// Output format for commands that print records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordFormat {
    /// Human-readable lines.
    Table,
    /// JSON document.
    Json,
}

// ── projects ──────────────────────────────────────────────────────────────────

/// Subcommands for `projectdesk projects`.
#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects, optionally filtered by name or client.
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive filter on name and client.
        #[arg(long = "search", value_name = "QUERY")]
        search: Option<String>,

        #[arg(long = "format", value_enum, help = "Output format")]
        format: Option<RecordFormat>,
    },

    /// Show one project.
    Show {
        /// Project id.
        id: String,
    },

    /// Validate a form and create a project from it.
    Create {
        #[command(flatten)]
        form: FormArgs,

        /// Opaque image reference, stored as given.
        #[arg(long = "image", value_name = "REF")]
        image: Option<String>,

        /// Use this id instead of a generated one.
        #[arg(long = "id", value_name = "ID")]
        id: Option<String>,
    },

    /// Edit a project; omitted fields keep their stored values.
    Update {
        /// Project id.
        id: String,

        #[command(flatten)]
        form: FormArgs,

        #[arg(long = "image", value_name = "REF")]
        image: Option<String>,
    },

    /// Delete a project.
    #[command(visible_alias = "rm")]
    Delete {
        /// Project id.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short = 'y', long = "yes", help = "Delete without asking")]
        yes: bool,
    },
}

// ── favorites ─────────────────────────────────────────────────────────────────

/// Subcommands for `projectdesk favorites`.
#[derive(Debug, Subcommand)]
pub enum FavoriteCommands {
    /// List favorite projects.
    #[command(visible_alias = "ls")]
    List {
        #[arg(long = "format", value_enum, help = "Output format")]
        format: Option<RecordFormat>,
    },

    /// Add a project to favorites, or remove it if already there.
    Toggle {
        /// Project id.
        id: String,
    },

    /// Remove every favorite.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short = 'y', long = "yes", help = "Clear without asking")]
        yes: bool,
    },

    /// Print the number of favorites.
    Count,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `projectdesk init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.projectdesk.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `projectdesk completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `projectdesk config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `api.base_url`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};
    use projectdesk_core::domain::Locale;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_validate_command() {
        let cli = Cli::parse_from([
            "projectdesk",
            "validate",
            "--name",
            "Acme Tower",
            "--client",
            "Acme",
            "-s",
            "01/05/2024",
            "-e",
            "10/05/2024",
        ]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected Validate command");
        };
        assert_eq!(args.form.name.as_deref(), Some("Acme Tower"));
        assert_eq!(args.form.end.as_deref(), Some("10/05/2024"));
        assert_eq!(args.format, None);
    }

    #[test]
    fn locale_is_parsed_globally() {
        let cli = Cli::parse_from(["projectdesk", "validate", "--locale", "pt-br"]);
        assert_eq!(cli.global.locale, Some(Locale::PtBr));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let result = Cli::try_parse_from(["projectdesk", "--locale", "klingon", "validate"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_favorites_toggle() {
        let cli = Cli::parse_from(["projectdesk", "fav", "toggle", "7"]);
        assert!(matches!(
            cli.command,
            Commands::Favorites(FavoriteCommands::Toggle { ref id }) if id == "7"
        ));
    }

    #[test]
    fn parse_projects_update_keeps_omitted_fields_empty() {
        let cli = Cli::parse_from(["projectdesk", "projects", "update", "3", "--client", "Initech"]);
        let Commands::Projects(ProjectCommands::Update { id, form, image }) = cli.command else {
            panic!("expected Update command");
        };
        assert_eq!(id, "3");
        assert_eq!(form.client.as_deref(), Some("Initech"));
        assert!(form.name.is_none());
        assert!(image.is_none());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["projectdesk", "--quiet", "--verbose", "favorites", "count"]);
        assert!(result.is_err());
    }
}
