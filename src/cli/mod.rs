//! TI-010: CLI surface — reserved `--timeIt.*` flags and passthrough dispatch.
//!
//! Only the first argument is inspected, and only for the reserved flags.
//! Everything else reaches the companion untouched, including `--`.

use crate::core::{config, executor};
use crate::error::{Error, Result};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

pub const HELP_FLAG: &str = "--timeIt.help";
pub const VER_FLAG: &str = "--timeIt.ver";

/// Help page definition. Not used to parse passthrough arguments.
#[derive(Parser, Debug)]
#[command(
    name = "timeIt",
    about = "timeIt: runs and times your binary and logs the results",
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = "Runs <folder>/<invoked name> and appends the elapsed time to <folder>/timeIt.log.\n\
                  <folder> is /tmp/timeIt/ (C:\\Temp\\timeIt\\ on Windows); set TIMEIT_DIR to relocate it."
)]
pub struct Usage {
    /// Show current version and exit
    #[arg(long = "timeIt.ver")]
    pub show_version: bool,

    /// Show this help section and exit
    #[arg(long = "timeIt.help")]
    pub show_help: bool,

    /// Arguments passed through to the companion binary
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 1..)]
    pub args: Vec<OsString>,
}

/// What a given command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Run {
        argv0: OsString,
        args: Vec<OsString>,
    },
}

/// Classify a full argv (including argv[0]).
pub fn parse_action<I>(argv: I) -> Result<Action>
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv = argv.into_iter();
    let argv0 = argv
        .next()
        .ok_or_else(|| Error::InvalidInvocation("missing argv[0]".to_string()))?;
    let args: Vec<OsString> = argv.collect();

    if let Some(first) = args.first() {
        let first = first.to_string_lossy();
        if first.contains(HELP_FLAG) {
            return Ok(Action::Help);
        }
        if first.contains(VER_FLAG) {
            return Ok(Action::Version);
        }
    }
    Ok(Action::Run { argv0, args })
}

pub fn help_text() -> String {
    Usage::command().render_help().to_string()
}

pub fn version_text() -> String {
    format!("timeIt: {}", crate::VERSION)
}

/// Dispatch a command line. Returns the process exit code.
pub fn dispatch<I>(argv: I) -> Result<i32>
where
    I: IntoIterator<Item = OsString>,
{
    match parse_action(argv)? {
        Action::Help => {
            println!("{}", help_text());
            Ok(0)
        }
        Action::Version => {
            println!("{}", version_text());
            Ok(0)
        }
        Action::Run { argv0, args } => {
            let settings = config::load_settings()?;
            let own_exe = std::env::current_exe()
                .map_err(|e| Error::io("cannot locate own executable", &argv0, e))?;
            executor::run(&executor::RunConfig {
                settings: &settings,
                own_exe: &own_exe,
                argv0: &argv0,
                args: &args,
            })
        }
    }
}
