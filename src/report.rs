//! Colored failure reporting.
//!
//! When stderr is a terminal, a failing assertion echoes its message with
//! the diff lines colorized before the panic unwinds; the panic message
//! itself stays plain so CI logs remain grep-able.

use std::io::Write as _;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prints a failure message to stderr with diff-aware coloring. Does
/// nothing when stderr is not a terminal.
pub fn print_failure(message: &str) {
    if !atty::is(atty::Stream::Stderr) {
        return;
    }
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    for line in message.lines() {
        let _ = stderr.set_color(&line_color(line));
        let _ = writeln!(stderr, "{}", line);
    }
    let _ = stderr.reset();
}

fn line_color(line: &str) -> ColorSpec {
    let mut spec = ColorSpec::new();
    if line.starts_with("--- ") || line.starts_with("+++ ") {
        spec.set_bold(true);
    } else if line.starts_with("@@") {
        spec.set_fg(Some(Color::Cyan));
    } else if line.starts_with('+') {
        spec.set_fg(Some(Color::Green));
    } else if line.starts_with('-') {
        spec.set_fg(Some(Color::Red));
    }
    spec
}
