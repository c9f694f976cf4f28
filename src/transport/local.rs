//! TI-008: Local execution of the companion with inherited stdio.

use super::ExecStatus;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Spawn `path` with `args`, forward stdio, and block until it exits.
/// The clock covers spawn through exit.
pub fn exec_companion(path: &Path, args: &[OsString]) -> Result<ExecStatus> {
    let start = Instant::now();
    let mut child = Command::new(path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| Error::io("failed to spawn", path, e))?;
    tracing::trace!(pid = child.id(), "companion spawned");

    let status = child
        .wait()
        .map_err(|e| Error::io("wait error", path, e))?;
    let elapsed = start.elapsed();
    tracing::debug!(?elapsed, code = ?status.code(), "companion exited");

    Ok(ExecStatus {
        exit_code: status.code(),
        elapsed,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sh(script: &str) -> Vec<OsString> {
        vec![OsString::from("-c"), OsString::from(script)]
    }

    #[test]
    fn test_ti008_local_success() {
        let out = exec_companion(Path::new("sh"), &sh("exit 0")).unwrap();
        assert!(out.success());
    }

    #[test]
    fn test_ti008_local_exit_code() {
        let out = exec_companion(Path::new("sh"), &sh("exit 42")).unwrap();
        assert!(!out.success());
        assert_eq!(out.exit_code, Some(42));
    }

    #[test]
    fn test_ti008_local_signal_killed() {
        let out = exec_companion(Path::new("sh"), &sh("kill -9 $$")).unwrap();
        assert_eq!(out.exit_code, None);
        assert_eq!(out.code_or_failure(), 1);
    }

    #[test]
    fn test_ti008_local_elapsed_covers_run() {
        let out = exec_companion(Path::new("sh"), &sh("sleep 0.2")).unwrap();
        assert!(out.elapsed >= Duration::from_millis(150), "{:?}", out.elapsed);
    }

    #[test]
    fn test_ti008_local_spawn_failure() {
        let err = exec_companion(Path::new("/nonexistent/companion"), &[]).unwrap_err();
        assert!(err.to_string().starts_with("failed to spawn /nonexistent/companion"));
    }
}
