//! TI-002: Path derivation — platform folder, companion binary, config file.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

const WIN_FOLDER: &str = "C:\\Temp\\timeIt\\";
const UNIX_FOLDER: &str = "/tmp/timeIt/";

/// Config file name inside the folder.
pub const CONFIG_FILE: &str = "timeIt.yaml";

/// Fixed per-OS folder that holds companion binaries and the log.
pub fn platform_dir() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(WIN_FOLDER)
    } else {
        PathBuf::from(UNIX_FOLDER)
    }
}

/// `<folder>/<basename of argv[0]>`.
///
/// Uses the name the wrapper was invoked under, so a copy or symlink named
/// `cc` resolves to `<folder>/cc`.
pub fn companion_path(folder: &Path, argv0: &OsStr) -> Result<PathBuf> {
    let base = Path::new(argv0).file_name().ok_or_else(|| {
        Error::InvalidInvocation(format!(
            "cannot derive binary name from {:?}",
            Path::new(argv0)
        ))
    })?;
    Ok(folder.join(base))
}

pub fn config_path(folder: &Path) -> PathBuf {
    folder.join(CONFIG_FILE)
}
