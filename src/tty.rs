//! Terminal capability check.

use crate::cli::ColorMode;

/// Reports whether output goes to an interactive terminal.
pub trait Terminal: Send + Sync {
    fn is_terminal(&self) -> bool;
}

/// The process's real standard output.
pub struct StdoutTerminal;

impl Terminal for StdoutTerminal {
    fn is_terminal(&self) -> bool {
        atty::is(atty::Stream::Stdout)
    }
}

/// A fixed answer, for tests and forced modes.
pub struct ForcedTerminal(pub bool);

impl Terminal for ForcedTerminal {
    fn is_terminal(&self) -> bool {
        self.0
    }
}

/// Whether `NO_COLOR` asks for plain output (set and non-empty).
pub fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Decide whether to colorize.
///
/// `no_color` only affects [`ColorMode::Auto`].
pub fn should_colorize(mode: ColorMode, terminal: &dyn Terminal, no_color: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => !no_color && terminal.is_terminal(),
    }
}
