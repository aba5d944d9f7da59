//! Java stack trace frames (`\tat pkg.Class.method(File.java:42)`).

use super::Rule;
use crate::colorize::ansi;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Groups: 1 `\tat `, 2 dotted segments, 3 method, 4 location without a
/// line number, 5 source file, 6 extension and colon, 7 line number.
///
/// Segments may carry a `loader/module@version/` prefix as printed by
/// Java 9+, where the module part can be empty (`app//com.example...`).
static FRAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\tat )((?:[\w$@-]+[./]|/)+)(<[\w$]+>|[\w$]+)\((?:(<generated>|Native Method|Unknown Source)|([\w$-]+)(\.(?:java|kt|scala|groovy):)(\d+))\)",
    )
    .expect("FRAME is a valid static regex pattern")
});

/// Colors the components of a stack trace frame.
pub struct StackTraceFrame;

impl StackTraceFrame {
    fn render(caps: &Captures) -> String {
        let mut out = ansi::wrap(ansi::BOLD_RED, &caps[1]);
        out.push_str(&caps[2]);
        out.push_str(&ansi::wrap(ansi::GREEN, &caps[3]));
        out.push('(');
        match caps.get(4) {
            Some(location) => out.push_str(&ansi::wrap(ansi::RED, location.as_str())),
            None => {
                out.push_str(&ansi::wrap(ansi::RED, &caps[5]));
                out.push_str(&caps[6]);
                out.push_str(&ansi::wrap(ansi::CYAN, &caps[7]));
            }
        }
        out.push(')');
        out
    }
}

impl Rule for StackTraceFrame {
    fn name(&self) -> &'static str {
        "stack-trace-frame"
    }

    fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        FRAME.replace(line, |caps: &Captures| Self::render(caps))
    }
}
