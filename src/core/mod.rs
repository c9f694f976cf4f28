//! Core logic — settings, path derivation, and the run sequence.

pub mod config;
pub mod executor;
pub mod paths;
pub mod types;
