//! TI-009: Executor — one wrapped run.
//!
//! companion path → self-invocation guard → spawn + time → child-exit policy → log line

use super::paths;
use super::types::{ChildExit, RunRecord, Settings};
use crate::error::{Error, Result};
use crate::transport::{self, local};
use crate::tripwire::{guard, timelog};
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Inputs for a single run.
pub struct RunConfig<'a> {
    pub settings: &'a Settings,
    /// File the running wrapper was loaded from
    pub own_exe: &'a Path,
    /// Name the wrapper was invoked under
    pub argv0: &'a OsStr,
    /// Arguments passed through to the companion
    pub args: &'a [OsString],
}

/// Execute the run. Returns the exit code the wrapper should use.
pub fn run(cfg: &RunConfig) -> Result<i32> {
    let companion = paths::companion_path(&cfg.settings.folder, cfg.argv0)?;
    tracing::debug!(companion = %companion.display(), "companion resolved");

    guard::check_not_self(cfg.own_exe, &companion)?;

    let status = local::exec_companion(&companion, cfg.args)?;

    if cfg.settings.child_exit == ChildExit::Fatal && !status.success() {
        return Err(Error::ChildFailed(status.code_or_failure()));
    }

    let record = RunRecord {
        timestamp_us: timelog::unix_micros(),
        tag: timelog::log_tag(),
        elapsed: status.elapsed,
        command: transport::command_line(&companion, cfg.args),
    };
    timelog::append_record(&cfg.settings.log_path(), &record)?;

    Ok(status.code_or_failure())
}
