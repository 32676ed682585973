//! The snapshot lifecycle engine.
//!
//! Each assertion is a single deterministic pass through a small state
//! machine: create the snapshot on first run, compare against it on later
//! runs, overwrite it in update mode, and fail with a rendered diff on
//! mismatch. The decision core, [`Config::check_bytes`], returns an explicit
//! [`Outcome`] and takes update mode as a parameter, so every path is
//! testable without touching the process environment or panicking. The
//! `assert_*` entry points layer environment reading and panic-on-failure
//! on top for use inside `#[test]` functions.

use std::env;
use std::fmt;

use crate::config::Config;
use crate::diff;
use crate::errors::SnapError;
use crate::render::{DebugRender, Render};
use crate::report;

/// Environment variable that switches every assertion in the run into
/// update mode. Presence is what counts; the value may be anything,
/// including empty.
pub const UPDATE_ENV_VAR: &str = "UPDATE_SNAPSHOTS";

// ============================================================================
// OUTCOME AND UPDATE MODE
// ============================================================================

/// Whether mismatching or missing snapshots are rewritten instead of
/// failing. Read from the environment once per assertion, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Enabled,
    Disabled,
}

impl UpdateMode {
    /// Reads [`UPDATE_ENV_VAR`] from the process environment at call time.
    pub fn from_env() -> Self {
        if env::var_os(UPDATE_ENV_VAR).is_some() {
            UpdateMode::Enabled
        } else {
            UpdateMode::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, UpdateMode::Enabled)
    }
}

/// Terminal outcome of one pass through the lifecycle machine.
///
/// `Fatal` marks environment or I/O trouble rather than a content mismatch;
/// both `Fail` and `Fatal` panic at the assertion entry points, but callers
/// of the checking core can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail { message: String },
    Fatal { message: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail { message } | Outcome::Fatal { message } => Some(message),
        }
    }
}

// ============================================================================
// DECISION CORE
// ============================================================================

impl Config {
    /// Runs the snapshot lifecycle for `name` against `actual`, with update
    /// mode passed explicitly. In order:
    ///
    /// 1. Missing snapshot directory: created (with the first snapshot) in
    ///    update mode, fatal otherwise.
    /// 2. Missing or unreadable snapshot file: recorded as the first run.
    /// 3. Byte-for-byte equal: pass, no side effect.
    /// 4. Mismatch in update mode: snapshot overwritten.
    /// 5. Mismatch, diffable: diff rendered; a configured ignore pattern
    ///    that matches the diff suppresses the failure, otherwise the diff
    ///    is the failure message.
    /// 6. Mismatch, not diffable: generic binary-mismatch failure.
    pub fn check_bytes(&self, name: &str, actual: &[u8], update: UpdateMode) -> Outcome {
        let store = self.store();

        if !store.dir_exists() {
            if !update.is_enabled() {
                return Outcome::Fatal {
                    message: format!(
                        "No snapshot directory exists and {} is not set. Failing.",
                        UPDATE_ENV_VAR
                    ),
                };
            }
            if let Err(err) = store.create_dir() {
                return Outcome::Fatal {
                    message: format!("Unable to create the snapshot directory: {}", err),
                };
            }
            return match store.write(name, actual) {
                Ok(()) => Outcome::Pass,
                Err(err) => fatal_create(err),
            };
        }

        let expected = match store.read(name) {
            Ok(bytes) => bytes,
            // First run for this test name; record and pass.
            Err(_) => {
                return match store.write(name, actual) {
                    Ok(()) => Outcome::Pass,
                    Err(err) => fatal_create(err),
                };
            }
        };

        if expected == actual {
            return Outcome::Pass;
        }

        if update.is_enabled() {
            return match store.write(name, actual) {
                Ok(()) => Outcome::Pass,
                Err(err) => fatal_create(err),
            };
        }

        if !self.diffable {
            return Outcome::Fail {
                message: format!(
                    "Snapshot test failed for: {}. Diff: (undiffable binary format)",
                    name
                ),
            };
        }

        let rendered = match diff::unified_diff(&expected, actual, self.context) {
            Ok(rendered) => rendered,
            Err(err) => {
                return Outcome::Fatal {
                    message: format!("Unable to compare snapshot to test output: {}", err),
                };
            }
        };
        if let Some(pattern) = self.ignore() {
            if diff::is_ignored(&rendered, pattern) {
                return Outcome::Pass;
            }
        }
        Outcome::Fail {
            message: format!("Snapshot test failed for: {}. Diff:\n\n{}", name, rendered),
        }
    }

    /// Like [`check_bytes`](Self::check_bytes) for a value rendered through
    /// `renderer` first.
    pub fn check_with<T, R>(&self, name: &str, value: &T, renderer: &R, update: UpdateMode) -> Outcome
    where
        T: ?Sized,
        R: Render<T>,
    {
        match renderer.render(value) {
            Ok(bytes) => self.check_bytes(name, &bytes, update),
            Err(err) => Outcome::Fatal {
                message: format!("Unable to serialize value for snapshot '{}': {}", name, err),
            },
        }
    }
}

fn fatal_create(err: SnapError) -> Outcome {
    Outcome::Fatal {
        message: format!("Unable to create snapshot: {}", err),
    }
}

// ============================================================================
// ASSERTION ENTRY POINTS
// ============================================================================

impl Config {
    /// Compares `actual` to the snapshot recorded for `name`, panicking into
    /// the calling test on mismatch. If no snapshot exists yet it is created
    /// and the assertion passes. Set `UPDATE_SNAPSHOTS` in the environment
    /// to rewrite snapshots instead of comparing.
    pub fn assert_bytes(&self, name: &str, actual: &[u8]) {
        finish(self.check_bytes(name, actual, UpdateMode::from_env()));
    }

    /// Asserts a value's structural dump against the snapshot for `name`.
    pub fn assert<T: fmt::Debug + ?Sized>(&self, name: &str, value: &T) {
        self.assert_with(name, value, &DebugRender);
    }

    /// Asserts a value rendered through `renderer` against the snapshot for
    /// `name`.
    pub fn assert_with<T, R>(&self, name: &str, value: &T, renderer: &R)
    where
        T: ?Sized,
        R: Render<T>,
    {
        finish(self.check_with(name, value, renderer, UpdateMode::from_env()));
    }
}

/// Asserts a value's structural dump against the snapshot for `name`, using
/// a fresh default configuration. Use [`Config`] directly to change where
/// snapshots are stored or how diffs are rendered.
///
/// # Examples
///
/// ```rust,no_run
/// let widths = vec![80, 120];
/// snaptest::assert("layout widths", &widths);
/// // or let the macro name the snapshot after the enclosing test:
/// snaptest::assert_snapshot!(widths);
/// ```
pub fn assert<T: fmt::Debug + ?Sized>(name: &str, value: &T) {
    default_config().assert(name, value);
}

/// Asserts raw bytes against the snapshot for `name` with the default
/// configuration. The bytes are stored as-is, so binary formats survive the
/// round trip untouched.
pub fn assert_bytes(name: &str, actual: &[u8]) {
    default_config().assert_bytes(name, actual);
}

fn default_config() -> Config {
    match Config::new() {
        Ok(config) => config,
        Err(err) => panic!("Unable to create snapshot config: {}", err),
    }
}

fn finish(outcome: Outcome) {
    match outcome {
        Outcome::Pass => {}
        Outcome::Fail { message } | Outcome::Fatal { message } => {
            report::print_failure(&message);
            panic!("{}", message);
        }
    }
}

// ============================================================================
// NAME-CAPTURE MACROS
// ============================================================================

/// Expands to the full path of the enclosing function, e.g.
/// `my_crate::widgets::tests::renders_empty_state`. The snapshot macros use
/// it as the test name, mirroring a test framework's own name accessor.
#[macro_export]
macro_rules! test_name {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let full = name_of(here);
        full.strip_suffix("::here").unwrap_or(full)
    }};
}

/// Asserts a value's structural dump against the snapshot named after the
/// enclosing test function. Pass a [`Config`](crate::Config) first to
/// override the defaults.
#[macro_export]
macro_rules! assert_snapshot {
    ($value:expr) => {
        $crate::assert($crate::test_name!(), &$value)
    };
    ($config:expr, $value:expr) => {
        $config.assert($crate::test_name!(), &$value)
    };
}

/// Asserts raw bytes against the snapshot named after the enclosing test
/// function.
#[macro_export]
macro_rules! assert_bytes_snapshot {
    ($bytes:expr) => {
        $crate::assert_bytes($crate::test_name!(), $bytes)
    };
    ($config:expr, $bytes:expr) => {
        $config.assert_bytes($crate::test_name!(), $bytes)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_captures_the_enclosing_function() {
        let name = test_name!();
        assert!(name.ends_with("engine::tests::test_name_captures_the_enclosing_function"));
    }

    #[test]
    fn update_mode_reports_enablement() {
        assert!(UpdateMode::Enabled.is_enabled());
        assert!(!UpdateMode::Disabled.is_enabled());
    }

    #[test]
    fn outcome_exposes_messages() {
        assert!(Outcome::Pass.is_pass());
        assert_eq!(Outcome::Pass.message(), None);
        let fail = Outcome::Fail {
            message: "boom".into(),
        };
        assert!(!fail.is_pass());
        assert_eq!(fail.message(), Some("boom"));
    }
}
