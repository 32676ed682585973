//! Snapshot configuration: where snapshots live and how mismatches are
//! reported.
//!
//! A [`Config`] is immutable once built. Construct one per assertion or hold
//! a shared reference; `Config::new()` gives the documented defaults, and
//! [`Config::builder`] overrides individual fields. Construction is fallible:
//! an invalid ignore pattern or an undeterminable working directory fails
//! `build()` outright rather than returning a partial configuration.

use std::env;
use std::path::PathBuf;

use regex::Regex;

use crate::errors::SnapError;

/// Directory snapshots are recorded under when none is configured,
/// relative to the current working directory.
pub const DEFAULT_SNAPSHOT_DIR: &str = "__snapshots__";

/// Default number of context lines shown around diff hunks.
pub const DEFAULT_CONTEXT_LINES: usize = 10;

/// Default snapshot file extension.
pub const DEFAULT_EXTENSION: &str = ".snap";

/// Settings for a snapshot assertion.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full path to the snapshot directory.
    pub directory: PathBuf,
    /// Number of lines of context to show around changes in snapshot diffs.
    pub context: usize,
    /// Whether output is diffable (false for binary file formats).
    pub diffable: bool,
    /// Extension of the recorded snapshot files. Useful when the recorded
    /// output is a binary format you want to inspect manually (e.g. images).
    pub extension: String,
    /// A pattern on the diff output that suppresses stateful changes which
    /// should not count as failures (e.g. embedded creation dates).
    ignore: Option<Regex>,
}

impl Config {
    /// Creates a configuration with the documented defaults: snapshots in
    /// `__snapshots__` under the current working directory, 10 context
    /// lines, diffable output, `.snap` extension, no ignore pattern.
    pub fn new() -> Result<Self, SnapError> {
        Self::builder().build()
    }

    /// Starts a builder with the default settings.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The compiled ignore pattern, if one was configured.
    pub fn ignore(&self) -> Option<&Regex> {
        self.ignore.as_ref()
    }
}

/// Builder for [`Config`]. Each setting is independent; unset fields keep
/// their defaults.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    directory: Option<PathBuf>,
    context: Option<usize>,
    diffable: Option<bool>,
    extension: Option<String>,
    ignore: Option<String>,
}

impl ConfigBuilder {
    /// Sets the snapshot directory to the full path given.
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    /// Sets the number of context lines shown around diff hunks.
    pub fn context(mut self, lines: usize) -> Self {
        self.context = Some(lines);
        self
    }

    /// Marks whether a meaningful diff can be shown for the recorded output.
    /// Set to false for binary formats (images, PDF files, etc.).
    pub fn diffable(mut self, diffable: bool) -> Self {
        self.diffable = Some(diffable);
        self
    }

    /// Changes the extension of the snapshot files from the default `.snap`.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = Some(ext.into());
        self
    }

    /// Sets a regex on the diff output that suppresses stateful changes which
    /// should not be considered failures. For example, PDF files embed
    /// creation dates that change from run to run but can be ignored with an
    /// appropriate pattern. Compiled at [`build`](Self::build); an invalid
    /// pattern fails construction.
    pub fn ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore = Some(pattern.into());
        self
    }

    /// Builds the configuration, resolving the default directory against the
    /// working directory and compiling the ignore pattern.
    pub fn build(self) -> Result<Config, SnapError> {
        let directory = match self.directory {
            Some(dir) => dir,
            None => env::current_dir()
                .map_err(|source| SnapError::WorkingDir { source })?
                .join(DEFAULT_SNAPSHOT_DIR),
        };
        let ignore = self
            .ignore
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|source| SnapError::IgnorePattern { source })?;
        Ok(Config {
            directory,
            context: self.context.unwrap_or(DEFAULT_CONTEXT_LINES),
            diffable: self.diffable.unwrap_or(true),
            extension: self.extension.unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            ignore,
        })
    }
}
