//! timeit — transparent timing wrapper.
//!
//! Runs a companion binary from a fixed folder, refuses to run itself,
//! and appends one timing line per run to an append-only log.

pub mod cli;
pub mod core;
pub mod error;
pub mod transport;
pub mod tripwire;

pub use error::{Error, Result};

/// Crate version, reported by `--timeIt.ver` and embedded in the log tag.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
