//! On-disk snapshot storage: test name → file path mapping plus the read,
//! write, and directory operations the lifecycle engine builds on.
//!
//! Filename derivation is pure and total. Two distinct test names that only
//! differ in normalized characters collide on the same file; callers own
//! unique naming (see [`snapshot_file_name`]).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::SnapError;

/// Derives the snapshot filename for a test name.
///
/// The name is lower-cased and each of `'`, space, `<`, `>`, `&`, `#`, `/`
/// and `\` is replaced by `-`, then the extension is appended. Identical
/// names always resolve to the same filename; the mapping is not
/// collision-free.
pub fn snapshot_file_name(test_name: &str, extension: &str) -> String {
    let mut name = String::with_capacity(test_name.len() + extension.len());
    for ch in test_name.chars() {
        match ch {
            '\'' | ' ' | '<' | '>' | '&' | '#' | '/' | '\\' => name.push('-'),
            _ => name.extend(ch.to_lowercase()),
        }
    }
    name.push_str(extension);
    name
}

/// File operations against one configured snapshot directory.
#[derive(Debug)]
pub struct SnapshotStore<'c> {
    directory: &'c Path,
    extension: &'c str,
}

impl<'c> SnapshotStore<'c> {
    pub fn new(directory: &'c Path, extension: &'c str) -> Self {
        Self {
            directory,
            extension,
        }
    }

    /// Whether the configured snapshot directory exists.
    pub fn dir_exists(&self) -> bool {
        self.directory.exists()
    }

    /// Creates the snapshot directory and any missing parents.
    pub fn create_dir(&self) -> Result<(), SnapError> {
        fs::create_dir_all(self.directory).map_err(|source| SnapError::CreateDir {
            path: self.directory.to_path_buf(),
            source,
        })
    }

    /// The full path a test name's snapshot is stored at.
    pub fn path_for(&self, test_name: &str) -> PathBuf {
        self.directory
            .join(snapshot_file_name(test_name, self.extension))
    }

    /// Creates or overwrites the snapshot for `test_name`.
    pub fn write(&self, test_name: &str, bytes: &[u8]) -> Result<(), SnapError> {
        let path = self.path_for(test_name);
        fs::write(&path, bytes).map_err(|source| SnapError::WriteSnapshot { path, source })
    }

    /// Reads the recorded snapshot for `test_name`. Any error, `NotFound`
    /// included, sends the engine down the first-run recording path rather
    /// than failing the assertion.
    pub fn read(&self, test_name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.path_for(test_name))
    }
}

impl Config {
    /// A store view over this configuration's directory and extension.
    pub fn store(&self) -> SnapshotStore<'_> {
        SnapshotStore::new(&self.directory, &self.extension)
    }
}
