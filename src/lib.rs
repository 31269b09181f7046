//! portfolio - Projects listing page generator
//!
//! Builds the "Projects" page of a personal site from a directory of project
//! metadata files. Each file starts with a small `key: value` header between
//! `---` lines; the header is turned into a [`project::Project`] record and
//! every record becomes a card on the page.
//!
//! # Architecture Overview
//!
//! ```text
//! public/projects/*.md ──► frontmatter::extract ──► Project::from_front_matter
//!                                                          │
//!                                   catalog::load_projects ◄┘
//!                                                          │
//!                               render::PageRenderer ──────┴──► projects.html
//! ```
//!
//! # Core Modules
//!
//! - [`frontmatter`] - Header detection and value coercion
//! - [`project`] - Project records, field defaults and date display
//! - [`catalog`] - Loading every project file in a directory
//! - [`render`] - Tera based HTML rendering of the listing page
//!
//! ## Supporting Modules
//! - [`cli`] - `list`, `render` and `inspect` subcommands
//! - [`config`] - `portfolio.toml` settings
//! - [`constants`] - Defaults shared across modules
//! - [`core`] - Error types and user facing error context
//! - [`utils`] - Atomic file writes
//!
//! # Header Format
//!
//! ```text
//! ---
//! title: Ferris Finder
//! description: Finds crabs
//! tags: [rust, cli]
//! featured: true
//! links: {"github": "https://github.com/me/ferris"}
//! ---
//! ```
//!
//! Values in `[..]` become lists, `true`/`false` become booleans, `{..}` is
//! parsed as a JSON object and everything else stays a string.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod frontmatter;
pub mod project;
pub mod render;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
