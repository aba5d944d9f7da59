//! Runs the wrapped tool and relays its output.
//!
//! In colorizing mode the child's stdout and stderr share one pipe, read a
//! line at a time, colorized and written out immediately. Otherwise the
//! wrapper gets out of the way: on Unix it `exec`s the tool so output and
//! exit status are exactly the tool's own.

#[cfg(unix)]
mod pipe;

use crate::cli::ColorMode;
use crate::colorize::Colorizer;
use crate::error::{Error, Result};
use crate::tty::{self, StdoutTerminal, Terminal};
use std::ffi::OsString;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};

/// Exit code used when the tool's status carries neither a code nor a signal.
const UNKNOWN_EXIT: i32 = 1;

/// The program to run and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: PathBuf, args: Vec<OsString>) -> Self {
        Self { program, args }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    fn spawn_error(&self, source: io::Error) -> Error {
        Error::Spawn {
            tool: self.program.clone(),
            source,
        }
    }

    /// Spawn with stdout and stderr merged into one readable stream.
    #[cfg(unix)]
    fn spawn_merged(&self) -> Result<(Box<dyn Read>, Child)> {
        let (reader, writer) = pipe::pipe()?;
        let err_writer = writer.try_clone()?;

        // `command` holds our copies of the write end; it must be dropped
        // before reading or end-of-stream never arrives.
        let child = {
            let mut command = self.command();
            command
                .stdin(Stdio::inherit())
                .stdout(Stdio::from(writer))
                .stderr(Stdio::from(err_writer));
            command.spawn().map_err(|e| self.spawn_error(e))?
        };

        Ok((Box::new(reader), child))
    }

    /// Spawn with stdout piped; stderr stays on the terminal.
    #[cfg(not(unix))]
    fn spawn_merged(&self) -> Result<(Box<dyn Read>, Child)> {
        let mut child = self
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "child stdout not captured"))?;
        Ok((Box::new(stdout), child))
    }

    /// Run the tool, colorizing its output into `out`.
    ///
    /// Returns the tool's exit code.
    pub fn run_colorized<W: Write>(&self, colorizer: &Colorizer, mut out: W) -> Result<i32> {
        let (reader, mut child) = self.spawn_merged()?;
        tracing::debug!(pid = child.id(), "spawned {}", self.program.display());

        let relayed = relay(BufReader::new(reader), &mut out, colorizer);
        if let Ok(RelayEnd::OutputClosed) = relayed {
            tracing::warn!("output closed, discarding the rest of the build output");
        }

        let status = child.wait()?;
        tracing::debug!(%status, "tool exited");
        relayed?;
        Ok(exit_code(status))
    }

    /// Run the tool with untouched output.
    ///
    /// On Unix this replaces the current process and only returns on
    /// failure.
    #[cfg(unix)]
    pub fn run_plain(&self) -> Result<i32> {
        use std::os::unix::process::CommandExt;

        tracing::debug!("exec {}", self.program.display());
        let source = self.command().exec();
        Err(self.spawn_error(source))
    }

    /// Run the tool with untouched output.
    #[cfg(not(unix))]
    pub fn run_plain(&self) -> Result<i32> {
        let status = self.command().status().map_err(|e| self.spawn_error(e))?;
        Ok(exit_code(status))
    }
}

/// How [`relay`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayEnd {
    /// The input reached end-of-stream.
    Eof,
    /// The output went away (broken pipe).
    OutputClosed,
}

/// Copy `reader` to `out` line by line through `colorizer`, flushing after
/// every line.
///
/// Invalid UTF-8 is replaced rather than rejected. A final line without a
/// newline is still written.
pub fn relay<R, W>(mut reader: R, out: &mut W, colorizer: &Colorizer) -> io::Result<RelayEnd>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(RelayEnd::Eof);
        }
        let line = String::from_utf8_lossy(&buf);
        let colored = colorizer.colorize(&line);
        match out.write_all(colored.as_bytes()).and_then(|()| out.flush()) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(RelayEnd::OutputClosed),
            Err(e) => return Err(e),
        }
    }
}

/// Exit code for a finished tool; signals map to `128 + signal` on Unix.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    UNKNOWN_EXIT
}

/// Keep the wrapper alive through Ctrl-C so the tool's final output and
/// status still get through. The tool receives the signal itself.
fn ignore_interrupts() {
    if let Err(e) = ctrlc::set_handler(|| {}) {
        tracing::warn!("could not install interrupt handler: {}", e);
    }
}

/// Chooses between the colorizing and the pass-through path.
pub struct Driver {
    terminal: Box<dyn Terminal>,
    no_color: bool,
    colorizer: Colorizer,
}

impl Driver {
    /// Create for the real stdout, honoring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_terminal(Box::new(StdoutTerminal), tty::no_color_requested())
    }

    /// Create with a specific terminal check (for testing).
    pub fn with_terminal(terminal: Box<dyn Terminal>, no_color: bool) -> Self {
        Self {
            terminal,
            no_color,
            colorizer: Colorizer::new(),
        }
    }

    /// Whether `mode` leads to colorized output.
    pub fn should_colorize(&self, mode: ColorMode) -> bool {
        tty::should_colorize(mode, self.terminal.as_ref(), self.no_color)
    }

    /// Run `invocation` under `mode`, returning the tool's exit code.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&self, invocation: &Invocation, mode: ColorMode) -> Result<i32> {
        let colorize = self.should_colorize(mode);
        tracing::debug!(
            ?mode,
            colorize,
            args = ?invocation.args,
            "running {}",
            invocation.program.display()
        );

        if colorize {
            ignore_interrupts();
            invocation.run_colorized(&self.colorizer, io::stdout().lock())
        } else {
            invocation.run_plain()
        }
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
