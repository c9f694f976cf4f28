//! TI-001: Shared types — config file schema, resolved settings, run record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// timeIt.yaml
// ============================================================================

/// Optional on-disk configuration, read from `<folder>/timeIt.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Log file name inside the folder
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// What to do with the companion's exit status
    #[serde(default)]
    pub child_exit: ChildExit,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            child_exit: ChildExit::default(),
        }
    }
}

fn default_log_file() -> String {
    "timeIt.log".to_string()
}

/// Policy for a companion that exits non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildExit {
    /// Log the run, then exit with the companion's own code.
    #[default]
    Mirror,
    /// Treat any non-zero status as fatal: exit 1, no log line.
    Fatal,
}

impl fmt::Display for ChildExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mirror => write!(f, "mirror"),
            Self::Fatal => write!(f, "fatal"),
        }
    }
}

// ============================================================================
// Resolved settings
// ============================================================================

/// Everything a run needs to know about where things live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Folder holding companions, the log, and the config
    pub folder: PathBuf,
    pub log_file: String,
    pub child_exit: ChildExit,
}

impl Settings {
    pub fn log_path(&self) -> PathBuf {
        self.folder.join(&self.log_file)
    }
}

// ============================================================================
// Run record
// ============================================================================

/// One completed companion run, as written to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// Microseconds since the Unix epoch, taken after the child exits
    pub timestamp_us: u128,
    /// `timeIt/<version>`
    pub tag: String,
    pub elapsed: Duration,
    /// Companion path followed by its arguments
    pub command: String,
}
