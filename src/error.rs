//! Wrapper errors.

use std::path::PathBuf;

/// Errors raised before or while running the wrapped tool.
///
/// Colorizing itself never fails; every variant here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot locate the wrapped tool: set maven_home in the config file or the M2_HOME/MAVEN_HOME environment variable")]
    MissingToolHome,

    #[error("Unrecognized invocation name '{name}' (expected one of: {expected})")]
    UnknownInvocation { name: String, expected: String },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to start {tool}: {source}")]
    Spawn {
        tool: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error while relaying output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this is a configuration problem detected before spawning.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingToolHome
                | Self::UnknownInvocation { .. }
                | Self::ConfigRead { .. }
                | Self::ConfigParse { .. }
        )
    }

    /// Process exit code for this error.
    ///
    /// Spawn failures follow the shell convention: 127 when the tool does
    /// not exist, 126 when it cannot be executed.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => 127,
                std::io::ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
            _ => 1,
        }
    }
}

/// Result alias for wrapper operations.
pub type Result<T> = std::result::Result<T, Error>;
