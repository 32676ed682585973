//! Unified diff rendering between recorded and actual output, and the
//! ignore-pattern check that can suppress a failing comparison.

use std::fmt::Write as _;

use regex::Regex;
use similar::TextDiff;

use crate::errors::SnapError;

/// Renders a unified line diff between the recorded and actual bytes, with
/// `context` lines of context around each hunk. The sides are labelled
/// `Expected` (recorded snapshot) and `Received` (output under test).
///
/// Both inputs are interpreted as UTF-8, lossily; undiffable binary formats
/// should be configured as such instead of relying on this rendering.
pub fn unified_diff(expected: &[u8], actual: &[u8], context: usize) -> Result<String, SnapError> {
    let expected = String::from_utf8_lossy(expected);
    let actual = String::from_utf8_lossy(actual);
    let diff = TextDiff::from_lines(expected.as_ref(), actual.as_ref());
    let mut rendered = String::new();
    write!(
        rendered,
        "{}",
        diff.unified_diff()
            .context_radius(context)
            .header("Expected", "Received")
    )
    .map_err(|source| SnapError::DiffRender { source })?;
    Ok(rendered)
}

/// True iff the ignore pattern matches anywhere in the rendered diff text.
///
/// This suppresses the whole assertion, not just the matched region: a
/// coarse escape hatch for known-volatile output such as embedded
/// timestamps.
pub fn is_ignored(diff_text: &str, pattern: &Regex) -> bool {
    pattern.is_match(diff_text)
}
