//! Exception type names anywhere in a line.

use super::Rule;
use crate::colorize::ansi;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static EXCEPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\w*Exception\b").expect("EXCEPTION is a valid static regex pattern")
});

/// Wraps every `...Exception` token in bold red.
pub struct ExceptionName;

impl Rule for ExceptionName {
    fn name(&self) -> &'static str {
        "exception-name"
    }

    fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        // Marker bytes such as the `31m` in `ESC[31m` are word characters.
        ansi::map_plain(line, |text| {
            EXCEPTION.replace_all(text, |caps: &Captures| {
                ansi::wrap(ansi::BOLD_RED, &caps[0])
            })
        })
    }
}
