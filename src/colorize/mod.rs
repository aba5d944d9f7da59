//! Line colorizer for Maven build output.
//!
//! A [`Colorizer`] runs a fixed sequence of [`Rule`]s over each line. Every
//! rule is a pure `&str -> Cow<str>` rewrite that wraps the substrings it
//! recognizes in ANSI markers, so rules can be tested one at a time and the
//! composed pipeline holds no state between lines.
//!
//! # Module Structure
//!
//! - [`ansi`] - Marker constants and marker-aware helpers
//! - [`rules`] - The individual rewrite rules

pub mod ansi;
pub mod rules;

pub use rules::{default_rules, Rule};

use once_cell::sync::Lazy;
use std::borrow::Cow;

static DEFAULT: Lazy<Colorizer> = Lazy::new(Colorizer::new);

/// Applies rewrite rules in order and terminates each line with a reset.
pub struct Colorizer {
    rules: Vec<Box<dyn Rule>>,
}

impl Colorizer {
    /// Create with the standard rule set.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create with specific rules (for testing).
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Get a reference to the rules list.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Run every rule over a line body, without the trailing reset.
    pub fn apply_rules(&self, body: &str) -> String {
        let mut current = body.to_string();
        for rule in &self.rules {
            let next = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            tracing::trace!(rule = rule.name(), "rule matched");
            current = next;
        }
        current
    }

    /// Colorize one line of output.
    ///
    /// The result is the rewritten body, a reset marker, and the original
    /// line terminator if there was one.
    pub fn colorize(&self, line: &str) -> String {
        let (body, terminator) = split_terminator(line);
        let mut out = self.apply_rules(body);
        out.push_str(ansi::RESET);
        out.push_str(terminator);
        out
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Colorize one line with the standard rule set.
pub fn colorize(line: &str) -> String {
    DEFAULT.colorize(line)
}

/// Split a trailing `\n` or `\r\n` off `line`.
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
