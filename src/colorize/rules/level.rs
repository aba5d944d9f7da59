//! Severity tags such as `[ERROR]` at the start of a line.

use super::Rule;
use crate::colorize::ansi;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static LEVEL_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[\s*(WARNING|WARN|ERROR|DEBUG|INFO|TRACE)\s*\]")
        .expect("LEVEL_TAG is a valid static regex pattern")
});

/// Colors the bracketed level tag that opens a line.
pub struct LevelTag;

impl LevelTag {
    /// Marker for a level name matched by [`LEVEL_TAG`].
    fn marker(level: &str) -> &'static str {
        match level {
            "WARN" | "WARNING" => ansi::YELLOW,
            "ERROR" => ansi::RED,
            "DEBUG" => ansi::GREEN,
            "INFO" => ansi::CYAN,
            _ => ansi::MAGENTA,
        }
    }
}

impl Rule for LevelTag {
    fn name(&self) -> &'static str {
        "level-tag"
    }

    fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let Some(caps) = LEVEL_TAG.captures(line) else {
            return Cow::Borrowed(line);
        };
        let tag = &caps[0];
        let marker = Self::marker(&caps[1]);
        Cow::Owned(format!("{}{}", ansi::wrap(marker, tag), &line[tag.len()..]))
    }
}
