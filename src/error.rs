//! TI-006: Error taxonomy. Every variant is fatal; `main` maps all of them to exit 1.

use std::path::PathBuf;
use thiserror::Error;

/// Program name used in user-facing messages and the log tag.
pub const BIN_NAME: &str = "timeIt";

#[derive(Error, Debug)]
pub enum Error {
    /// The companion path holds a copy of the running wrapper.
    #[error("You cannot evoke {} directly", BIN_NAME)]
    SelfInvocation,

    #[error("{context} {}: {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(String),

    /// Companion exited non-zero under `child_exit: fatal`.
    #[error("companion exited with status {0}")]
    ChildFailed(i32),

    #[error("invalid invocation: {0}")]
    InvalidInvocation(String),
}

impl Error {
    pub(crate) fn io(
        context: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Error::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// Full stderr line, including the fixed prefix for this error class.
    pub fn report(&self) -> String {
        match self {
            Error::SelfInvocation => format!("Err 3.1: {}", self),
            _ => format!("Fatal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
