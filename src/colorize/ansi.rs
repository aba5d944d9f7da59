//! ANSI display-attribute markers.
//!
//! The colorizer only ever emits SGR sequences (`ESC [ ... m`). Rules that
//! could otherwise match marker bytes run on the text between control
//! sequences via [`map_plain`]; that covers any CSI sequence the tool
//! printed itself, such as `ESC [ 2 K`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

pub const BOLD_RED: &str = "\x1b[1;31m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_CYAN: &str = "\x1b[1;36m";

/// A single SGR escape sequence.
static SGR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR is a valid static regex pattern"));

/// Any CSI control sequence: parameters, intermediates, final byte.
static CSI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]").expect("CSI is a valid static regex pattern")
});

/// Wrap `text` in `marker`, followed by a reset.
pub fn wrap(marker: &str, text: &str) -> String {
    format!("{}{}{}", marker, text, RESET)
}

/// Remove every SGR sequence from `line`.
pub fn strip(line: &str) -> Cow<'_, str> {
    SGR.replace_all(line, "")
}

/// Apply `f` to each run of text between control sequences, copying the
/// sequences through unchanged.
///
/// Each run is handed to `f` on its own, so anchors and word boundaries in
/// `f`'s patterns see the run edges rather than marker bytes.
pub fn map_plain<'a, F>(line: &'a str, mut f: F) -> Cow<'a, str>
where
    F: FnMut(&str) -> Cow<'_, str>,
{
    if !line.contains('\x1b') {
        return f(line);
    }

    let mut out = String::with_capacity(line.len());
    let mut changed = false;
    let mut last = 0;
    let bounds = CSI
        .find_iter(line)
        .map(|m| (m.start(), m.end()))
        .chain(std::iter::once((line.len(), line.len())));

    for (start, end) in bounds {
        let mapped = f(&line[last..start]);
        changed |= matches!(mapped, Cow::Owned(_));
        out.push_str(&mapped);
        out.push_str(&line[start..end]);
        last = end;
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(line)
    }
}
