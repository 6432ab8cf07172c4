//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--api-url`, `--locale`, `--no-color`)
//! 2. Environment variables: `PROJECTDESK_<SECTION>__<KEY>`, e.g.
//!    `PROJECTDESK_API__BASE_URL` or `PROJECTDESK_LOCALE`
//! 3. `.projectdesk.toml` in the current directory
//! 4. The file given with `--config`, or the platform config file
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use projectdesk_adapters::projects::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use projectdesk_core::domain::Locale;

use crate::cli::global::GlobalArgs;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".projectdesk.toml";

const ENV_PREFIX: &str = "PROJECTDESK";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language of validation messages and long dates.
    pub locale: Locale,
    /// Projects REST resource.
    pub api: ApiConfig,
    /// Local favorites storage.
    pub favorites: FavoritesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    pub path: PathBuf,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: default_favorites_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the platform config file is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let primary = match config_file {
            Some(path) => file_source(path, true),
            None => file_source(&Self::config_path(), false),
        };

        let settings = config::Config::builder()
            .add_source(primary)
            .add_source(file_source(Path::new(LOCAL_CONFIG_FILE), false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Apply flags given on the command line.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(url) = &args.api_url {
            self.api.base_url = url.clone();
        }
        if let Some(locale) = args.locale {
            self.locale = locale;
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.projectdesk.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "projectdesk", "projectdesk")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

fn file_source(
    path: &Path,
    required: bool,
) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path)
        .format(config::FileFormat::Toml)
        .required(required)
}

fn default_favorites_path() -> PathBuf {
    directories::ProjectDirs::from("com", "projectdesk", "projectdesk")
        .map(|d| d.data_dir().join("favorites.json"))
        .unwrap_or_else(|| PathBuf::from(".projectdesk").join("favorites.json"))
}
