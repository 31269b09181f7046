//! List the projects found in the projects directory.
//!
//! # Output Formats
//!
//! ## Table Format (Default)
//! ```text
//! Projects
//!
//! SLUG      TITLE        DATE              TAGS       FEATURED
//! alpha     Alpha        January 5, 2024   rust, cli  yes
//! ```
//!
//! ## JSON / YAML
//! Full [`Project`] records, one array element per project.
//!
//! ## Simple
//! One slug per line, for scripting.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{CliConfig, load_catalog};
use crate::project::Project;

/// Command to list projects.
#[derive(Args, Debug, Clone)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, default_value = "table", value_parser = ["table", "json", "yaml", "simple"])]
    pub format: String,

    /// Only show featured projects
    #[arg(long)]
    pub featured: bool,

    /// Put featured projects first
    #[arg(long)]
    pub featured_first: bool,

    /// Fail if any project file cannot be loaded
    #[arg(long)]
    pub strict: bool,
}

impl ListCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let portfolio = config.load_portfolio_config().await?;
        let catalog = load_catalog(&portfolio.projects_dir, self.strict, self.featured_first).await?;

        let projects: Vec<&Project> = if self.featured {
            catalog.featured().collect()
        } else {
            catalog.iter().collect()
        };

        let output = format_projects(&projects, &self.format, &portfolio.title)?;
        print!("{output}");
        Ok(())
    }
}

/// Render projects in the requested format.
pub fn format_projects(projects: &[&Project], format: &str, title: &str) -> Result<String> {
    match format {
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(projects)?)),
        "yaml" => Ok(serde_yaml::to_string(projects)?),
        "simple" => Ok(projects.iter().map(|p| format!("{}\n", p.slug)).collect()),
        _ => Ok(format_table(projects, title)),
    }
}

fn format_table(projects: &[&Project], title: &str) -> String {
    if projects.is_empty() {
        return "No projects found.\n".to_string();
    }

    let rows: Vec<[String; 5]> = projects
        .iter()
        .map(|p| {
            [
                p.slug.clone(),
                p.title.clone(),
                p.display_date().unwrap_or_else(|| p.date.clone()),
                p.tags.join(", "),
                if p.featured { "yes" } else { "" }.to_string(),
            ]
        })
        .collect();

    let headers = ["SLUG", "TITLE", "DATE", "TAGS", "FEATURED"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        let mut out = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.truncate(out.trim_end().len());
        out.push('\n');
        out
    };

    let mut output = format!("{}\n\n", title.bold());
    let header_cells = headers.map(str::to_string);
    output.push_str(&line(&header_cells).as_str().cyan().bold().to_string());
    for row in &rows {
        output.push_str(&line(row));
    }
    output.push_str(&format!("\n{}: {} project(s)\n", "Total".green().bold(), projects.len()));
    output
}
