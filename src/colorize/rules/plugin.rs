//! Plugin execution headers, e.g. `--- compiler:3.11.0:compile (default-compile) @ demo ---`.

use super::Rule;
use crate::colorize::ansi;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static PLUGIN_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--- .* ---$").expect("PLUGIN_MARKER is a valid static regex pattern")
});

/// Wraps a trailing plugin execution marker in cyan.
pub struct PluginMarker;

impl Rule for PluginMarker {
    fn name(&self) -> &'static str {
        "plugin-marker"
    }

    fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        PLUGIN_MARKER.replace(line, |caps: &Captures| ansi::wrap(ansi::CYAN, &caps[0]))
    }
}
