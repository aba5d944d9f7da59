//! Line rewrite rules, one per recognized log pattern.

mod banner;
mod exception;
mod level;
mod outcome;
mod plugin;
mod stack_trace;
mod summary;

pub use banner::Banner;
pub use exception::ExceptionName;
pub use level::LevelTag;
pub use outcome::BuildOutcome;
pub use plugin::PluginMarker;
pub use stack_trace::StackTraceFrame;
pub use summary::TestSummary;

use std::borrow::Cow;

/// A stateless rewrite of a single line.
///
/// Implementations wrap matched substrings in display-attribute markers and
/// return the input borrowed when nothing matched.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Rewrite `line`, which never contains a line terminator.
    fn apply<'a>(&self, line: &'a str) -> Cow<'a, str>;
}

/// The rules in the order they are applied.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(LevelTag),
        Box::new(Banner),
        Box::new(TestSummary),
        Box::new(BuildOutcome),
        Box::new(PluginMarker),
        Box::new(StackTraceFrame),
        Box::new(ExceptionName),
    ]
}

/// Run `rewrite` on the result of a previous rewrite, keeping the original
/// borrow when neither changed anything.
pub(crate) fn chain<'a, F>(first: Cow<'a, str>, rewrite: F) -> Cow<'a, str>
where
    F: FnOnce(&str) -> Cow<'_, str>,
{
    let second = match rewrite(&first) {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    };
    match second {
        Some(s) => Cow::Owned(s),
        None => first,
    }
}
