//! Section banners: long dash rules and the spaced `T E S T S` heading.

use super::Rule;
use crate::colorize::ansi;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Group 1 catches a bold green marker sitting directly in front of the
/// banner, which means the banner has already been wrapped. Any other
/// marker (a reset after a level tag, say) does not count.
static BANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\x1b\[1;32m)?(-{50,}$|T E S T S)")
        .expect("BANNER is a valid static regex pattern")
});

/// Wraps section banners in bold green.
pub struct Banner;

impl Rule for Banner {
    fn name(&self) -> &'static str {
        "banner"
    }

    fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        BANNER.replace_all(line, |caps: &Captures| {
            if caps.get(1).is_some() {
                caps[0].to_string()
            } else {
                ansi::wrap(ansi::BOLD_GREEN, &caps[2])
            }
        })
    }
}
