//! The wrapped tool, chosen by the name the wrapper was invoked under.

use crate::config::Config;
use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Environment variables naming the Maven installation, in lookup order.
pub const HOME_VARS: &[&str] = &["M2_HOME", "MAVEN_HOME"];

/// A tool the wrapper knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// The Maven launcher
    Mvn,
    /// Maven with the JVM debugger enabled
    MvnDebug,
}

impl Tool {
    /// Every recognized tool.
    pub const ALL: [Tool; 2] = [Tool::Mvn, Tool::MvnDebug];

    /// Invocation name, which is also the launcher script name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mvn => "mvn",
            Self::MvnDebug => "mvnDebug",
        }
    }

    /// Select the tool from `argv[0]`.
    ///
    /// Only the file name counts; a trailing `.exe` is ignored.
    pub fn from_invocation(argv0: &OsStr) -> Result<Self> {
        let file_name = Path::new(argv0)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = file_name.strip_suffix(".exe").unwrap_or(&file_name);

        Self::ALL
            .into_iter()
            .find(|tool| tool.name() == name)
            .ok_or_else(|| Error::UnknownInvocation {
                name: file_name.clone(),
                expected: Self::ALL.map(|t| t.name()).join(", "),
            })
    }

    /// Path of the launcher inside a Maven installation.
    pub fn locate(&self, home: &Path) -> PathBuf {
        let script = if cfg!(windows) {
            format!("{}.cmd", self.name())
        } else {
            self.name().to_string()
        };
        home.join("bin").join(script)
    }
}

/// Find the Maven installation directory.
///
/// The config file's `maven_home` wins, then the [`HOME_VARS`] in order.
/// Empty values are ignored. `env` looks up environment variables.
pub fn resolve_home<F>(config: &Config, env: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(home) = config.maven_home.as_ref().filter(|h| !h.as_os_str().is_empty()) {
        return Ok(home.clone());
    }
    HOME_VARS
        .iter()
        .filter_map(|var| env(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or(Error::MissingToolHome)
}
