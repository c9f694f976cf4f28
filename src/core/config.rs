//! TI-003: Settings resolution — folder override, timeIt.yaml parsing and validation.
//!
//! Resolution order for the folder:
//! - `TIMEIT_DIR` when set and non-empty
//! - the fixed platform folder otherwise
//!
//! `<folder>/timeIt.yaml` is optional; a missing file means defaults.

use super::paths;
use super::types::{FileConfig, Settings};
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable that relocates the folder.
pub const DIR_ENV: &str = "TIMEIT_DIR";

/// Validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Pick the folder from an optional override value.
pub fn resolve_folder(override_dir: Option<OsString>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => paths::platform_dir(),
    }
}

/// Parse timeIt.yaml content. Blank content yields defaults.
pub fn parse_config(yaml: &str) -> Result<FileConfig> {
    if yaml.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml_ng::from_str(yaml).map_err(|e| Error::Config(format!("YAML parse error: {}", e)))
}

/// Validate a parsed config. Returns a list of errors (empty = valid).
pub fn validate_config(config: &FileConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let name = config.log_file.as_str();

    if name.trim().is_empty() {
        errors.push(ValidationError {
            message: "log_file must not be empty".to_string(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        errors.push(ValidationError {
            message: format!("log_file must be a bare file name, got \"{}\"", name),
        });
    }
    if name == "." || name == ".." {
        errors.push(ValidationError {
            message: format!("log_file \"{}\" is not a file name", name),
        });
    }

    errors
}

/// Load and validate `<folder>/timeIt.yaml`, falling back to defaults if absent.
pub fn load_file_config(folder: &Path) -> Result<FileConfig> {
    let path = paths::config_path(folder);
    if !path.exists() {
        tracing::trace!(path = %path.display(), "no config file, using defaults");
        return Ok(FileConfig::default());
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::io("cannot read", &path, e))?;
    let config = parse_config(&content)?;

    let errors = validate_config(&config);
    if !errors.is_empty() {
        let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(Error::Config(format!(
            "{}: {}",
            path.display(),
            joined.join("; ")
        )));
    }
    Ok(config)
}

/// Resolve settings for a given folder.
pub fn settings_for(folder: PathBuf) -> Result<Settings> {
    let file = load_file_config(&folder)?;
    tracing::debug!(
        folder = %folder.display(),
        log_file = %file.log_file,
        child_exit = %file.child_exit,
        "settings resolved"
    );
    Ok(Settings {
        folder,
        log_file: file.log_file,
        child_exit: file.child_exit,
    })
}

/// Resolve settings from the process environment.
pub fn load_settings() -> Result<Settings> {
    settings_for(resolve_folder(std::env::var_os(DIR_ENV)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ChildExit;

    #[test]
    fn test_ti003_resolve_folder_override() {
        let p = resolve_folder(Some(OsString::from("/opt/timing")));
        assert_eq!(p, PathBuf::from("/opt/timing"));
    }

    #[test]
    fn test_ti003_resolve_folder_empty_override_ignored() {
        assert_eq!(resolve_folder(Some(OsString::new())), paths::platform_dir());
        assert_eq!(resolve_folder(None), paths::platform_dir());
    }

    #[test]
    fn test_ti003_parse_full() {
        let cfg = parse_config("log_file: runs.log\nchild_exit: fatal\n").unwrap();
        assert_eq!(cfg.log_file, "runs.log");
        assert_eq!(cfg.child_exit, ChildExit::Fatal);
    }

    #[test]
    fn test_ti003_parse_partial_uses_defaults() {
        let cfg = parse_config("child_exit: fatal\n").unwrap();
        assert_eq!(cfg.log_file, "timeIt.log");
    }

    #[test]
    fn test_ti003_parse_blank() {
        assert_eq!(parse_config("  \n").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_ti003_parse_unknown_key_rejected() {
        let err = parse_config("log_fiel: x.log\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_ti003_parse_bad_policy() {
        assert!(parse_config("child_exit: sometimes\n").is_err());
    }

    #[test]
    fn test_ti003_validate_ok() {
        assert!(validate_config(&FileConfig::default()).is_empty());
    }

    #[test]
    fn test_ti003_validate_rejects_paths() {
        for bad in ["", "a/b.log", "..\\x.log", ".."] {
            let cfg = FileConfig {
                log_file: bad.to_string(),
                ..FileConfig::default()
            };
            assert!(!validate_config(&cfg).is_empty(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_ti003_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_file_config(dir.path()).unwrap();
        assert_eq!(cfg, FileConfig::default());
    }

    #[test]
    fn test_ti003_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("timeIt.yaml"), "log_file: nested/x.log\n").unwrap();
        let err = load_file_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("bare file name"));
    }

    #[test]
    fn test_ti003_settings_for() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("timeIt.yaml"), "log_file: runs.log\n").unwrap();
        let s = settings_for(dir.path().to_path_buf()).unwrap();
        assert_eq!(s.log_path(), dir.path().join("runs.log"));
        assert_eq!(s.child_exit, ChildExit::Mirror);
    }
}
