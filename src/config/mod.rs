//! Configuration management for portfolio
//!
//! Settings live in an optional `portfolio.toml` at the site root. Every key is
//! optional; a missing file means all defaults.
//!
//! ```toml
//! # Heading shown above the project cards
//! title = "Projects"
//!
//! # Directory holding one front-matter file per project
//! projects_dir = "public/projects"
//!
//! # Where `portfolio render` writes the page
//! output = "dist/projects.html"
//!
//! # URL prefix for each card's title link (`{link_prefix}/{slug}`)
//! link_prefix = "/projects"
//!
//! # Optional Tera template replacing the built-in page
//! template = "templates/projects.html"
//! ```
//!
//! Relative paths are resolved against the current working directory, the
//! same way the site build itself runs from the project root. Command-line
//! flags override file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_LINK_PREFIX, DEFAULT_OUTPUT, DEFAULT_PROJECTS_DIR, DEFAULT_TITLE,
};
use crate::core::PortfolioError;

/// Site-level settings for the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Page heading
    pub title: String,

    /// Directory scanned for project files
    pub projects_dir: PathBuf,

    /// Output path for the rendered page
    pub output: PathBuf,

    /// Prefix for per-project links
    pub link_prefix: String,

    /// Custom Tera template path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            projects_dir: PathBuf::from(DEFAULT_PROJECTS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            template: None,
        }
    }
}

impl PortfolioConfig {
    /// Load configuration from an optional explicit path.
    ///
    /// With `Some(path)` the file must exist. With `None`, `portfolio.toml`
    /// in the current directory is used if present, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, the file cannot be
    /// read, contains invalid TOML, or fails validation.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path_exists(&path).await? {
                    return Err(PortfolioError::ConfigError {
                        message: format!("config file not found: {}", path.display()),
                    }
                    .into());
                }
                Self::load_from(&path).await
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path_exists(&path).await? {
                    Self::load_from(&path).await
                } else {
                    tracing::debug!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file path.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::parse(&content, path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration text. `origin` is used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| PortfolioError::ConfigParseError {
                file: origin.display().to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.projects_dir.as_os_str().is_empty() {
            return Err(PortfolioError::ConfigError {
                message: "projects_dir must not be empty".to_string(),
            }
            .into());
        }
        if self.output.as_os_str().is_empty() {
            return Err(PortfolioError::ConfigError {
                message: "output must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_projects_dir(mut self, projects_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = projects_dir {
            self.projects_dir = dir;
        }
        self
    }
}

async fn path_exists(path: &Path) -> Result<bool> {
    fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to access config file {}", path.display()))
}
