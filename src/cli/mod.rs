//! Command-line interface for portfolio.
//!
//! # Available Commands
//!
//! - `list` - Print the projects found in the projects directory
//! - `render` - Render the projects listing page to HTML
//! - `inspect` - Show the front matter extracted from a single file
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - Errors only
//! - `--config` / `-c` - Path to `portfolio.toml`
//! - `--projects-dir` - Override the configured projects directory
//!
//! # Example
//!
//! ```bash
//! portfolio list --format json
//! portfolio --projects-dir content/projects render --output dist/projects.html
//! portfolio inspect public/projects/alpha.md
//! ```
//!
//! `list` and `render` are best effort by default: when a project file cannot
//! be loaded the error is logged and the listing is empty, just like the live
//! page. Pass `--strict` to fail instead.

mod inspect;
mod list;
mod render;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::catalog::{self, Catalog};
use crate::config::PortfolioConfig;

pub use inspect::InspectCommand;
pub use list::ListCommand;
pub use render::RenderCommand;

/// Runtime configuration for CLI execution.
///
/// Built from the parsed global flags so tests can construct it directly
/// instead of going through argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` leaves the subscriber uninitialised.
    pub log_level: Option<String>,

    /// Explicit path to `portfolio.toml`.
    pub config_path: Option<PathBuf>,

    /// Override for the configured projects directory.
    pub projects_dir: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the verbosity flags. Logs go to
    /// stderr so command output on stdout stays machine readable.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(level)
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Load `portfolio.toml` and apply command-line overrides.
    pub async fn load_portfolio_config(&self) -> Result<PortfolioConfig> {
        let config = PortfolioConfig::load_with_optional(self.config_path.clone())
            .await?
            .with_projects_dir(self.projects_dir.clone());
        config.validate()?;
        Ok(config)
    }
}

/// Main CLI structure for portfolio.
#[derive(Parser)]
#[command(
    name = "portfolio",
    about = "Render a Projects listing page from front-matter annotated files",
    version,
    long_about = "portfolio reads one metadata file per project, extracts the key: value header at the top of each file, and lists or renders the projects as cards."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file (default: ./portfolio.toml if present)
    #[arg(short, long, global = true, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Directory containing project files (overrides the config file)
    #[arg(long, global = true)]
    projects_dir: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the projects found in the projects directory.
    ///
    /// See [`ListCommand`] for options.
    List(ListCommand),

    /// Render the projects listing page to HTML.
    ///
    /// See [`RenderCommand`] for options.
    Render(RenderCommand),

    /// Show the front matter extracted from a single file.
    ///
    /// See [`InspectCommand`] for options.
    Inspect(InspectCommand),
}

impl Cli {
    /// Execute the CLI with configuration built from the parsed flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Translate global flags into a [`CliConfig`].
    ///
    /// - `--verbose` → `debug`
    /// - `--quiet` → `error`
    /// - default → `warn`
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            config_path: self.config.clone(),
            projects_dir: self.projects_dir.clone(),
        }
    }

    /// Execute with an injected configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::List(cmd) => cmd.execute(&config).await,
            Commands::Render(cmd) => cmd.execute(&config).await,
            Commands::Inspect(cmd) => cmd.execute().await,
        }
    }
}

/// Load the catalog for `list` and `render`.
///
/// With `strict` any load failure is returned; otherwise it is logged and an
/// empty catalog is used.
async fn load_catalog(projects_dir: &Path, strict: bool, featured_first: bool) -> Result<Catalog> {
    let mut catalog = if strict {
        catalog::load_projects(projects_dir).await?
    } else {
        catalog::load_projects_lenient(projects_dir).await
    };

    if featured_first {
        catalog.sort_featured_first();
    }

    Ok(catalog)
}
