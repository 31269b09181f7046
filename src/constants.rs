//! Global constants used throughout the portfolio codebase.
//!
//! Default locations and page text live here so the config layer, the
//! loader and the renderer agree on them.

/// Config file looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

/// Default page heading.
pub const DEFAULT_TITLE: &str = "Projects";

/// Default directory holding one file per project.
pub const DEFAULT_PROJECTS_DIR: &str = "public/projects";

/// Default output path of `portfolio render`.
pub const DEFAULT_OUTPUT: &str = "dist/projects.html";

/// Default prefix for a card's title link.
pub const DEFAULT_LINK_PREFIX: &str = "/projects";

/// Extension stripped from file names to build slugs.
pub const PROJECT_FILE_EXTENSION: &str = ".md";

/// Heading shown when no projects could be loaded.
pub const EMPTY_LISTING_HEADING: &str = "No projects found";

/// Message shown under [`EMPTY_LISTING_HEADING`].
pub const EMPTY_LISTING_MESSAGE: &str = "Check back later for new content!";
