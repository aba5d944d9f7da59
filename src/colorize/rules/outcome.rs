//! Build and reactor outcome markers.

use super::{chain, Rule};
use crate::colorize::ansi;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static BUILD_RESULT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"BUILD (?:SUCCESS|FAILURE)").expect("BUILD_RESULT is a valid static regex pattern")
});

/// Per-module result at the end of a reactor summary line.
static MODULE_RESULT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:SUCCESS|FAILURE) \[[^\]]*\]$|SKIPPED$")
        .expect("MODULE_RESULT is a valid static regex pattern")
});

static TOTAL_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Total time:\s*)([\w:.]+(?:\s+[\w:.]+)*)")
        .expect("TOTAL_TIME is a valid static regex pattern")
});

/// Colors `BUILD SUCCESS`/`BUILD FAILURE`, reactor module results and the
/// total build time.
pub struct BuildOutcome;

impl BuildOutcome {
    /// Bold marker for an outcome word.
    fn marker(outcome: &str) -> &'static str {
        if outcome.starts_with("SKIPPED") {
            ansi::BOLD_YELLOW
        } else if outcome.contains("FAILURE") {
            ansi::BOLD_RED
        } else {
            ansi::BOLD_GREEN
        }
    }

    fn build_result(line: &str) -> Cow<'_, str> {
        BUILD_RESULT.replace_all(line, |caps: &Captures| {
            ansi::wrap(Self::marker(&caps[0]), &caps[0])
        })
    }

    fn module_result(line: &str) -> Cow<'_, str> {
        MODULE_RESULT.replace(line, |caps: &Captures| {
            ansi::wrap(Self::marker(&caps[0]), &caps[0])
        })
    }

    fn total_time(line: &str) -> Cow<'_, str> {
        TOTAL_TIME.replace(line, |caps: &Captures| {
            format!("{}{}", &caps[1], ansi::wrap(ansi::CYAN, &caps[2]))
        })
    }
}

impl Rule for BuildOutcome {
    fn name(&self) -> &'static str {
        "build-outcome"
    }

    fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let line = Self::build_result(line);
        let line = chain(line, Self::module_result);
        chain(line, Self::total_time)
    }
}
