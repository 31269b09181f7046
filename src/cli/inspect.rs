//! Show the front matter extracted from a single file.
//!
//! Useful when a project card looks wrong: prints exactly what the extractor
//! saw, or with `--project` the record built from it after defaults.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;

use crate::core::PortfolioError;
use crate::frontmatter;
use crate::project::Project;

/// Command to inspect one document.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// File to inspect
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "json", value_parser = ["json", "yaml"])]
    pub format: String,

    /// Show the project record (with defaults applied) instead of raw fields
    #[arg(long)]
    pub project: bool,
}

impl InspectCommand {
    pub async fn execute(self) -> Result<()> {
        let text = fs::read_to_string(&self.file)
            .await
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        let file_name = self
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string());

        let front_matter = frontmatter::extract(&text)
            .map_err(|e| PortfolioError::from_front_matter(&file_name, &e))?;

        if front_matter.is_empty() {
            tracing::warn!("No front matter found in {}", self.file.display());
        }

        if self.project {
            let project = Project::from_front_matter(&file_name, &front_matter);
            print!("{}", serialize(&project, &self.format)?);
        } else {
            print!("{}", serialize(&front_matter, &self.format)?);
        }
        Ok(())
    }
}

fn serialize<T: Serialize>(value: &T, format: &str) -> Result<String> {
    match format {
        "yaml" => Ok(serde_yaml::to_string(value)?),
        _ => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
    }
}
