//! Test fixtures for project files and configuration
//!
//! [`ProjectFixture`] builds the text of one project file field by field so
//! tests read like the header they produce.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Test fixture for a single project file
#[derive(Clone, Debug)]
pub struct ProjectFixture {
    pub file_name: String,
    pub fields: Vec<(String, String)>,
    pub body: String,
}

impl ProjectFixture {
    /// Empty fixture for `file_name`; no header is written until a field is added
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            fields: Vec::new(),
            body: String::new(),
        }
    }

    /// `<slug>.md` with a title, description and date
    pub fn basic(slug: &str) -> Self {
        let title = capitalize(slug);
        Self::new(format!("{slug}.md"))
            .field("title", &title)
            .field("description", &format!("About {title}"))
            .field("date", "2024-01-05")
    }

    /// `<slug>.md` marked featured with tags and both links
    pub fn featured(slug: &str) -> Self {
        Self::basic(slug)
            .field("tags", "[rust, cli]")
            .field("featured", "true")
            .field(
                "links",
                &format!(
                    r#"{{"github": "https://github.com/example/{slug}", "live": "https://{slug}.example.com"}}"#
                ),
            )
    }

    /// Add a raw `key: value` header line
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.push((key.to_string(), value.to_string()));
        self
    }

    /// Text placed after the header
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Full file text
    pub fn content(&self) -> String {
        let mut content = String::new();
        if !self.fields.is_empty() {
            content.push_str("---\n");
            for (key, value) in &self.fields {
                content.push_str(&format!("{key}: {value}\n"));
            }
            content.push_str("---\n");
        }
        content.push_str(&self.body);
        content
    }

    /// Write the file into `dir`, returning its path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, self.content())
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }
}

/// Test fixture for `portfolio.toml`
#[derive(Clone, Debug)]
pub struct ConfigFixture {
    pub content: String,
}

impl ConfigFixture {
    /// Config pointing at `projects_dir` and `output` with a custom title
    pub fn with_paths(title: &str, projects_dir: &str, output: &str) -> Self {
        Self {
            content: format!(
                "title = \"{title}\"\nprojects_dir = \"{projects_dir}\"\noutput = \"{output}\"\n"
            ),
        }
    }

    /// Config with broken TOML syntax
    pub fn invalid() -> Self {
        Self {
            content: "title = \"Projects\nprojects_dir = [".to_string(),
        }
    }

    /// Write `portfolio.toml` into `dir`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(crate::constants::DEFAULT_CONFIG_FILE);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
