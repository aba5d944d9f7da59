//! The wrapper's own command line.
//!
//! Everything on the command line belongs to the wrapped tool except
//! `--color=<mode>`, which may appear anywhere before a bare `--`. Those
//! flags are pulled out first and parsed with [`Cli`]; the rest is
//! forwarded untouched.

use clap::{CommandFactory, FromArgMatches, Parser, ValueEnum};
use serde::Deserialize;
use std::ffi::{OsStr, OsString};

/// Prefix of the only flag the wrapper consumes.
const COLOR_FLAG: &str = "--color=";

/// When to colorize output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colorize when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Always colorize
    Always,
    /// Never colorize; run the tool directly
    Never,
}

/// Maven wrapper that colors build output.
///
/// Install as (or symlink to) `mvn` or `mvnDebug`. All arguments except
/// --color are passed to the real tool.
#[derive(Debug, Parser)]
#[command(name = "mvn-color", version, about, long_about = None, args_override_self = true)]
pub struct Cli {
    /// When to colorize output
    #[arg(long, value_enum, value_name = "MODE", require_equals = true)]
    pub color: Option<ColorMode>,
}

impl Cli {
    /// Parse the wrapper flags previously extracted by [`split_args`].
    ///
    /// `bin_name` is used in usage messages.
    pub fn parse_flags(bin_name: &str, flags: &[OsString]) -> Result<Self, clap::Error> {
        let argv = std::iter::once(OsString::from(bin_name)).chain(flags.iter().cloned());
        let matches = Self::flag_command(bin_name).try_get_matches_from(argv)?;
        Self::from_arg_matches(&matches)
    }

    /// The wrapper's usage line, e.g. `Usage: mvn [OPTIONS]`.
    pub fn usage(bin_name: &str) -> String {
        Self::flag_command(bin_name).render_usage().to_string()
    }

    /// The message printed for a rejected wrapper flag: clap's error
    /// followed by the usage line.
    pub fn usage_error(bin_name: &str, err: &clap::Error) -> String {
        format!("{}\n\n{}\n", err.to_string().trim_end(), Self::usage(bin_name))
    }

    /// `--help` and `--version` go to the wrapped tool, so the command used
    /// for the wrapper's own flags has neither. Clap then leaves its
    /// "try '--help'" tip out of error messages.
    fn flag_command(bin_name: &str) -> clap::Command {
        Self::command()
            .bin_name(bin_name.to_string())
            .disable_help_flag(true)
            .disable_version_flag(true)
    }
}

/// Arguments split between the wrapper and the wrapped tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitArgs {
    /// `--color=<mode>` flags, in order.
    pub wrapper: Vec<OsString>,
    /// Everything else, in order.
    pub tool: Vec<OsString>,
}

/// Separate wrapper flags from the wrapped tool's arguments.
///
/// Arguments after a bare `--` are never inspected.
pub fn split_args<I>(args: I) -> SplitArgs
where
    I: IntoIterator<Item = OsString>,
{
    let mut split = SplitArgs::default();
    let mut passthrough = false;

    for arg in args {
        if !passthrough && arg == "--" {
            passthrough = true;
        } else if !passthrough && is_color_flag(&arg) {
            split.wrapper.push(arg);
            continue;
        }
        split.tool.push(arg);
    }

    split
}

fn is_color_flag(arg: &OsStr) -> bool {
    arg.to_str().is_some_and(|s| s.starts_with(COLOR_FLAG))
}
