//! Surefire/Failsafe test result summaries.

use super::{chain, Rule};
use crate::colorize::ansi;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static TESTS_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Tests run: ([^,]*), Failures: ([^,]*), Errors: ([^,]*), Skipped: ([^,]*)")
        .expect("TESTS_RUN is a valid static regex pattern")
});

/// Surefire prints the elapsed seconds with the platform locale, so the
/// decimal separator may be a comma.
static TIME_ELAPSED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Time elapsed: ([0-9]+(?:[.,][0-9]+)?)")
        .expect("TIME_ELAPSED is a valid static regex pattern")
});

/// Colors the counters of a `Tests run:` summary and the elapsed time.
pub struct TestSummary;

impl TestSummary {
    fn counters<'a>(line: &'a str) -> Cow<'a, str> {
        TESTS_RUN.replace_all(line, |caps: &Captures| {
            format!(
                "{}Tests run: {}{}, Failures: {}, Errors: {}, Skipped: {}",
                ansi::BOLD_GREEN,
                &caps[1],
                ansi::RESET,
                ansi::wrap(ansi::BOLD_RED, &caps[2]),
                ansi::wrap(ansi::BOLD_RED, &caps[3]),
                ansi::wrap(ansi::BOLD_YELLOW, &caps[4]),
            )
        })
    }

    fn elapsed(line: &str) -> Cow<'_, str> {
        TIME_ELAPSED.replace_all(line, |caps: &Captures| {
            format!("Time elapsed: {}", ansi::wrap(ansi::BOLD_CYAN, &caps[1]))
        })
    }
}

impl Rule for TestSummary {
    fn name(&self) -> &'static str {
        "test-summary"
    }

    fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        chain(Self::counters(line), Self::elapsed)
    }
}
