//! Temporary project trees for pipeline and CLI tests.
//!
//! # Examples
//!
//! ```
//! use apex_theme_test_helpers::project::ThemeProject;
//!
//! let project = ThemeProject::new().expect("create project");
//! let path = project.write_text("src/theme/apex-light.json", "{}").expect("write");
//! assert!(path.starts_with(project.root()));
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

/// Raw light export location used by the dashboard.
pub const LIGHT_RAW: &str = "src/theme/figma/light.raw.json";
/// Raw dark export location used by the dashboard.
pub const DARK_RAW: &str = "src/theme/figma/dark.raw.json";
/// Mapping configuration location used by the dashboard.
pub const MAPPING: &str = "src/theme/figma/mapping.config.json";
/// Generated light theme location.
pub const LIGHT_OUTPUT: &str = "src/theme/apex-light.json";
/// Generated dark theme location.
pub const DARK_OUTPUT: &str = "src/theme/apex-dark.json";

/// A throwaway project root removed when dropped.
#[derive(Debug)]
pub struct ThemeProject {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ThemeProject {
    /// Creates an empty project root in the system temp directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp project")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("temp path is not UTF-8: {}", path.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Project root directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Absolute path of `relative` inside the project.
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write_text(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Serialises `value` as JSON into `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn write_json(&self, relative: &str, value: &Value) -> Result<Utf8PathBuf> {
        let contents = serde_json::to_string_pretty(value).context("serialise fixture")?;
        self.write_text(relative, &contents)
    }

    /// Writes both raw exports and the mapping configuration at the
    /// dashboard's default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be written.
    pub fn write_apex_inputs(&self, light: &Value, dark: &Value, mapping: &Value) -> Result<()> {
        self.write_json(LIGHT_RAW, light)?;
        self.write_json(DARK_RAW, dark)?;
        self.write_json(MAPPING, mapping)?;
        Ok(())
    }

    /// Reads `relative` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read_text(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        std::fs::read_to_string(&path).with_context(|| format!("read {path}"))
    }

    /// Deletes `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    pub fn remove(&self, relative: &str) -> Result<()> {
        let path = self.path(relative);
        std::fs::remove_file(&path).with_context(|| format!("remove {path}"))
    }
}
