//! Render the projects listing page to HTML.
//!
//! Writes to the configured `output` path unless `--output` or `--stdout`
//! is given. The file is written atomically.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::{CliConfig, load_catalog};
use crate::render::PageRenderer;
use crate::utils::fs::safe_write;

/// Command to render the listing page.
#[derive(Args, Debug, Clone)]
pub struct RenderCommand {
    /// Output file (overrides the config file)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the page to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Custom Tera template (overrides the config file)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Put featured projects first
    #[arg(long)]
    pub featured_first: bool,

    /// Fail if any project file cannot be loaded
    #[arg(long)]
    pub strict: bool,
}

impl RenderCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let mut portfolio = config.load_portfolio_config().await?;
        if let Some(template) = self.template {
            portfolio.template = Some(template);
        }

        let catalog = load_catalog(&portfolio.projects_dir, self.strict, self.featured_first).await?;
        let renderer = PageRenderer::from_config(&portfolio).await?;
        let html = renderer.render(&catalog)?;

        if self.stdout {
            print!("{html}");
            return Ok(());
        }

        let output = self.output.unwrap_or(portfolio.output);
        safe_write(&output, &html)
            .with_context(|| format!("Failed to write rendered page to {}", output.display()))?;

        tracing::info!("Wrote {} bytes to {}", html.len(), output.display());
        println!(
            "{} {} project(s) to {}",
            "Rendered".green().bold(),
            catalog.len(),
            output.display()
        );
        Ok(())
    }
}
