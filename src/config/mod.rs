//! Pipeline configuration management for `weft.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath, field status
//! ├── util.rs        # Config file discovery, path expansion
//! └── mod.rs         # WeftConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                     |
//! |-------------|---------------------------------------------|
//! | `[resolve]` | Reference fields, depth, self references    |
//! | `[flatten]` | Frontmatter flattening                      |
//! | `[pages]`   | Page source and site object                 |
//! | `[source]`  | Default input/output files                  |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{FlattenConfig, PagesConfig, ResolveConfig, SourceConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, PipelineArgs},
    debug, log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename, searched upward from the working directory.
pub const CONFIG_FILE: &str = "weft.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing weft.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeftConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative `[source]` paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub flatten: FlattenConfig,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub source: SourceConfig,
}

impl WeftConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// An explicit `--config` must exist. Otherwise `weft.toml` is searched
    /// upward from the working directory, and defaults apply when none is
    /// found. CLI flags override file values; the result is validated.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match &cli.config {
            Some(path) => match find_config_file(path) {
                Some(found) => Self::from_path(&found)?,
                None => bail!(ConfigError::Io(
                    path.clone(),
                    std::io::Error::from(std::io::ErrorKind::NotFound)
                )),
            },
            None => match find_config_file(Path::new(CONFIG_FILE)) {
                Some(found) => Self::from_path(&found)?,
                None => {
                    debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                    Self::default()
                }
            },
        };

        if config.root.as_os_str().is_empty() {
            config.root = cwd;
        }
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        debug!("config"; "loaded {}", path.display());
        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    ///
    /// No prompt here: stdin may carry the object set.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides and normalize paths.
    fn finalize(&mut self, cli: &Cli) {
        if let Some(args) = cli.command.pipeline_args() {
            self.apply_pipeline_args(args);
        }
        let root = self.root.clone();
        self.source.normalize(&root);
    }

    /// Apply pipeline arguments from CLI.
    fn apply_pipeline_args(&mut self, args: &PipelineArgs) {
        Self::update_option(&mut self.resolve.field_names, args.fields.as_ref());
        Self::update_option(&mut self.resolve.max_depth, args.max_depth.as_ref());
        Self::update_option(&mut self.flatten.enable, args.flatten.as_ref());
        Self::update_option(&mut self.pages.source, args.source.as_ref());
        Self::update_option(&mut self.pages.site_id, args.site_id.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.resolve.validate_field_status(&mut diag);
        self.flatten.validate_field_status(&mut diag);
        self.pages.validate_field_status(&mut diag);
        self.source.validate_field_status(&mut diag);

        self.resolve.validate(&mut diag);
        self.pages.validate(&mut diag);

        diag.print_hints_and_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> WeftConfig {
    let (parsed, ignored) = WeftConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
