//! Unified error type for snapshot configuration and storage failures.
//!
//! Content mismatches are not errors: they are ordinary assertion outcomes
//! and live in [`crate::engine::Outcome`]. Everything here is fatal to the
//! assertion that triggered it.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// All failure modes of the snapshot machinery itself.
#[derive(Debug, Error, Diagnostic)]
pub enum SnapError {
    /// The configured ignore pattern is not a valid regular expression.
    #[error("invalid ignore pattern: {source}")]
    #[diagnostic(
        code(snaptest::config::ignore_pattern),
        help("the ignore pattern is compiled with the `regex` crate; check its syntax")
    )]
    IgnorePattern {
        #[source]
        source: regex::Error,
    },

    /// The default snapshot directory is relative to the working directory,
    /// which could not be determined.
    #[error("unable to determine the current working directory: {source}")]
    #[diagnostic(code(snaptest::config::working_dir))]
    WorkingDir {
        #[source]
        source: io::Error,
    },

    /// Creating the snapshot directory failed.
    #[error("unable to create snapshot directory {path:?}: {source}")]
    #[diagnostic(code(snaptest::store::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a snapshot file failed.
    #[error("unable to write snapshot file {path:?}: {source}")]
    #[diagnostic(code(snaptest::store::write))]
    WriteSnapshot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rendering the unified diff failed. Diffing valid line-split input
    /// should never fail, so this indicates an invariant violation.
    #[error("unable to render diff output: {source}")]
    #[diagnostic(code(snaptest::diff::render))]
    DiffRender {
        #[source]
        source: std::fmt::Error,
    },

    /// A pluggable renderer failed to serialize the value under test.
    #[error("unable to serialize value to JSON: {source}")]
    #[diagnostic(code(snaptest::render::json))]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}
