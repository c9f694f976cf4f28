//! TI-008: Transport — running the companion binary.

pub mod local;

use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

/// Outcome of running a companion to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecStatus {
    /// `None` when the child was terminated by a signal
    pub exit_code: Option<i32>,
    /// Wall-clock time from spawn to exit
    pub elapsed: Duration,
}

impl ExecStatus {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Exit code to hand back to our own caller; signal deaths map to 1.
    pub fn code_or_failure(&self) -> i32 {
        self.exit_code.unwrap_or(1)
    }
}

/// Command string for the log: path then each argument, space separated.
pub fn command_line(path: &Path, args: &[OsString]) -> String {
    let mut line = path.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ti008_exec_status_success() {
        let ok = ExecStatus { exit_code: Some(0), elapsed: Duration::ZERO };
        assert!(ok.success());
        assert_eq!(ok.code_or_failure(), 0);
        let fail = ExecStatus { exit_code: Some(3), elapsed: Duration::ZERO };
        assert!(!fail.success());
        assert_eq!(fail.code_or_failure(), 3);
        let sig = ExecStatus { exit_code: None, elapsed: Duration::ZERO };
        assert!(!sig.success());
        assert_eq!(sig.code_or_failure(), 1);
    }

    #[test]
    fn test_ti008_command_line_no_args() {
        assert_eq!(command_line(Path::new("/tmp/timeIt/cc"), &[]), "/tmp/timeIt/cc");
    }

    #[test]
    fn test_ti008_command_line_args_verbatim() {
        let args: Vec<OsString> = ["-o", "out file", "--timeIt.other"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(
            command_line(Path::new("/tmp/timeIt/cc"), &args),
            "/tmp/timeIt/cc -o out file --timeIt.other"
        );
    }
}
