//! mvn-color: a Maven wrapper that colors build output.
//!
//! The binary is installed as `mvn` or `mvnDebug`, runs the real tool from
//! the Maven installation and pipes every output line through the
//! [`Colorizer`].

pub mod cli;
pub mod colorize;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod tool;
pub mod tty;

pub use cli::{Cli, ColorMode};
pub use colorize::{colorize, Colorizer};
pub use config::Config;
pub use driver::{Driver, Invocation};
pub use error::{Error, Result};
pub use tool::Tool;
