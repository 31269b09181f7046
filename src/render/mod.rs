//! HTML rendering of the projects listing.
//!
//! The page is a Tera template. A built-in template ships with the binary;
//! `template` in `portfolio.toml` can point at a replacement. Templates are
//! registered under an `.html` name so Tera autoescapes every value. The
//! escape function leaves `/` untouched so URLs stay readable.
//!
//! # Template Context
//!
//! | Variable | Type | Notes |
//! |----------|------|-------|
//! | `title` | string | page heading |
//! | `empty_heading`, `empty_message` | string | shown when `cards` is empty |
//! | `cards` | list | one entry per project, see [`Card`] |

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tera::{Context as TeraContext, Tera};

use crate::catalog::Catalog;
use crate::config::PortfolioConfig;
use crate::constants::{EMPTY_LISTING_HEADING, EMPTY_LISTING_MESSAGE};
use crate::core::PortfolioError;
use crate::project::Project;

const TEMPLATE_NAME: &str = "projects.html";

const DEFAULT_TEMPLATE: &str = include_str!("projects.html");

/// Per-project view handed to the template.
#[derive(Debug, Clone, Serialize)]
pub struct Card<'a> {
    pub slug: &'a str,
    pub href: String,
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub logo: &'a str,
    /// Formatted date, or the raw value when it cannot be parsed.
    pub date: String,
    pub tags: &'a [String],
    pub featured: bool,
    pub github: Option<&'a str>,
    pub live: Option<&'a str>,
}

impl<'a> Card<'a> {
    fn new(project: &'a Project, link_prefix: &str) -> Self {
        Self {
            slug: &project.slug,
            href: format!("{}/{}", link_prefix.trim_end_matches('/'), project.slug),
            title: &project.title,
            description: &project.description,
            image: &project.image,
            logo: &project.logo,
            date: project.display_date().unwrap_or_else(|| project.date.clone()),
            tags: &project.tags,
            featured: project.featured,
            github: project.links.has_github().then_some(project.links.github.as_str()),
            live: project.links.live.as_deref(),
        }
    }
}

/// Renders a [`Catalog`] into a complete HTML page.
pub struct PageRenderer {
    tera: Tera,
    title: String,
    link_prefix: String,
}

impl PageRenderer {
    /// Create a renderer using the built-in template.
    pub fn new(title: impl Into<String>, link_prefix: impl Into<String>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.set_escape_fn(escape_html);
        tera.add_raw_template(TEMPLATE_NAME, DEFAULT_TEMPLATE).map_err(render_error)?;
        Ok(Self {
            tera,
            title: title.into(),
            link_prefix: link_prefix.into(),
        })
    }

    /// Create a renderer from configuration, loading a custom template if set.
    pub async fn from_config(config: &PortfolioConfig) -> Result<Self> {
        let mut renderer = Self::new(&config.title, &config.link_prefix)?;
        if let Some(template) = &config.template {
            renderer.use_template_file(template).await?;
        }
        Ok(renderer)
    }

    /// Replace the built-in template with the file at `path`.
    pub async fn use_template_file(&mut self, path: &Path) -> Result<()> {
        let source = match tokio::fs::read_to_string(path).await {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PortfolioError::FileSystemError {
                    operation: "read template".to_string(),
                    path: path.display().to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to read template {}", path.display())));
            }
        };
        self.tera
            .add_raw_template(TEMPLATE_NAME, &source)
            .map_err(render_error)
            .with_context(|| format!("Failed to load template {}", path.display()))?;
        tracing::debug!("Using custom template {}", path.display());
        Ok(())
    }

    /// Render the listing page.
    pub fn render(&self, catalog: &Catalog) -> Result<String> {
        let cards: Vec<Card<'_>> =
            catalog.iter().map(|project| Card::new(project, &self.link_prefix)).collect();

        let mut context = TeraContext::new();
        context.insert("title", &self.title);
        context.insert("empty_heading", EMPTY_LISTING_HEADING);
        context.insert("empty_message", EMPTY_LISTING_MESSAGE);
        context.insert("cards", &cards);

        Ok(self.tera.render(TEMPLATE_NAME, &context).map_err(render_error)?)
    }
}

/// HTML escaping for text and attribute values.
///
/// Unlike Tera's default this leaves `/` alone, so URLs in `href` and `src`
/// attributes stay readable.
fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}

/// Flatten a Tera error and its causes into a [`PortfolioError::RenderError`].
fn render_error(error: tera::Error) -> PortfolioError {
    let mut reason = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    PortfolioError::RenderError {
        reason,
    }
}
