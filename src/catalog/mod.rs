//! Loading the projects directory into a [`Catalog`].
//!
//! Every regular, non-hidden file directly inside the projects directory is
//! one project. Files are decoded as UTF-8, with invalid bytes replaced by
//! U+FFFD, passed through
//! [`frontmatter::extract`](crate::frontmatter::extract), and turned into
//! [`Project`] records. The catalog keeps them sorted by file name.
//!
//! # Failure Policy
//!
//! - A missing projects directory is not an error: a warning is logged and
//!   the catalog is empty.
//! - [`load_projects`] stops at the first file that cannot be read or has
//!   a malformed object value and reports which file it was.
//! - [`load_projects_lenient`] matches the page's best-effort behaviour: any
//!   such failure is logged and the whole listing comes back empty.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use crate::core::PortfolioError;
use crate::frontmatter;
use crate::project::Project;

/// Ordered collection of loaded projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// Projects marked `featured: true`, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Move featured projects to the front, keeping relative order otherwise.
    pub fn sort_featured_first(&mut self) {
        self.projects.sort_by_key(|p| !p.featured);
    }

    pub fn find(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

/// Parse one project document. `file_name` is used for the slug and in errors.
pub fn parse_project(file_name: &str, text: &str) -> Result<Project, PortfolioError> {
    let front_matter = frontmatter::extract(text)
        .map_err(|e| PortfolioError::from_front_matter(file_name, &e))?;
    Ok(Project::from_front_matter(file_name, &front_matter))
}

/// Load every project file in `dir`.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be listed, or if any
/// project file cannot be read or contains a malformed object value.
pub async fn load_projects(dir: &Path) -> Result<Catalog> {
    let exists = fs::try_exists(dir)
        .await
        .with_context(|| format!("Failed to access projects directory: {}", dir.display()))?;
    if !exists {
        tracing::warn!("Projects directory does not exist: {}", dir.display());
        return Ok(Catalog::default());
    }

    let mut file_names = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read projects directory: {}", dir.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read projects directory: {}", dir.display()))?
    {
        let file_type = entry
            .file_type()
            .await
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            tracing::trace!("Skipping hidden file {name}");
            continue;
        }
        file_names.push(name);
    }
    file_names.sort();

    let mut projects = Vec::with_capacity(file_names.len());
    for name in file_names {
        let text = read_lossy(&dir.join(&name), &name).await?;
        let project = parse_project(&name, &text)?;
        tracing::debug!("Loaded project '{}' from {}", project.slug, name);
        projects.push(project);
    }

    tracing::info!("Loaded {} project(s) from {}", projects.len(), dir.display());
    Ok(Catalog::new(projects))
}

/// Read a project file as text. Invalid UTF-8 is replaced with U+FFFD.
async fn read_lossy(path: &Path, name: &str) -> Result<String, PortfolioError> {
    let bytes = fs::read(path).await.map_err(|e| PortfolioError::ProjectLoad {
        file: name.to_string(),
        reason: e.to_string(),
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!("{name} is not valid UTF-8; invalid bytes were replaced");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Load every project file in `dir`, degrading to an empty catalog on error.
pub async fn load_projects_lenient(dir: &Path) -> Catalog {
    match load_projects(dir).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Error reading projects directory: {e:#}");
            Catalog::default()
        }
    }
}
