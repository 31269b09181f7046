//! Test environment setup and management
//!
//! A [`TestEnvironment`] is a temporary site root with a `public/projects`
//! directory, matching the default configuration so commands run with
//! `current_dir` set to [`TestEnvironment::root`] need no flags.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::{ConfigFixture, ProjectFixture};
use crate::constants::{DEFAULT_OUTPUT, DEFAULT_PROJECTS_DIR};

/// Temporary site root for tests
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub projects_dir: PathBuf,
}

impl TestEnvironment {
    /// Create an environment with an empty projects directory
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        let projects_dir = temp_dir.path().join(DEFAULT_PROJECTS_DIR);
        fs::create_dir_all(&projects_dir)?;

        Ok(Self {
            temp_dir,
            projects_dir,
        })
    }

    /// Create an environment holding a basic and a featured project
    pub fn with_sample_projects() -> Result<Self> {
        let env = Self::new()?;
        env.add_project(&ProjectFixture::basic("alpha"))?;
        env.add_project(&ProjectFixture::featured("beta"))?;
        Ok(env)
    }

    /// Site root
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Default render output path
    pub fn output_path(&self) -> PathBuf {
        self.root().join(DEFAULT_OUTPUT)
    }

    /// Write a project file into the projects directory
    pub fn add_project(&self, fixture: &ProjectFixture) -> Result<PathBuf> {
        fixture.write_to(&self.projects_dir)
    }

    /// Write a raw file into the projects directory
    pub fn add_raw_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.projects_dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `portfolio.toml` at the site root
    pub fn write_config(&self, fixture: &ConfigFixture) -> Result<PathBuf> {
        fixture.write_to(self.root())
    }

    /// Remove the projects directory entirely
    pub fn remove_projects_dir(&self) -> Result<()> {
        fs::remove_dir_all(&self.projects_dir)?;
        Ok(())
    }

    /// Read a file relative to the site root
    pub fn read_file(&self, relative: impl AsRef<Path>) -> Result<String> {
        Ok(fs::read_to_string(self.root().join(relative))?)
    }
}
