//! TI-007: Append-only timing log.
//!
//! One line per run:
//! `<unix-micros> <tag> took <duration> to run cmd: <command>`

use crate::core::types::RunRecord;
use crate::error::{BIN_NAME, Error, Result};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_MINUTE: u128 = 60_000_000_000;

/// Microseconds since the Unix epoch.
pub fn unix_micros() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros()
}

/// Program tag: `timeIt/<version>`.
pub fn log_tag() -> String {
    format!("{}/{}", BIN_NAME, crate::VERSION)
}

/// Render `value / 10^prec` with trailing fractional zeros trimmed.
fn fixed_point(value: u128, prec: u32) -> String {
    let scale = 10u128.pow(prec);
    let int = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return int.to_string();
    }
    let digits = format!("{:0width$}", frac, width = prec as usize);
    format!("{}.{}", int, digits.trim_end_matches('0'))
}

/// Compact duration: `42ns`, `1.5µs`, `12.3ms`, `2.5s`, `1m2s`, `1h0m0s`.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }
    if nanos < 1_000_000 {
        return format!("{}µs", fixed_point(nanos, 3));
    }
    if nanos < 1_000_000_000 {
        return format!("{}ms", fixed_point(nanos, 6));
    }

    let secs = fixed_point(nanos % NANOS_PER_MINUTE, 9);
    let minutes = nanos / NANOS_PER_MINUTE;
    match (minutes / 60, minutes % 60) {
        (0, 0) => format!("{}s", secs),
        (0, m) => format!("{}m{}s", m, secs),
        (h, m) => format!("{}h{}m{}s", h, m, secs),
    }
}

/// Render a record as a single newline-terminated log line.
pub fn format_line(record: &RunRecord) -> String {
    format!(
        "{} {} took {} to run cmd: {}\n",
        record.timestamp_us,
        record.tag,
        format_duration(record.elapsed),
        record.command
    )
}

/// Append one record to the log. Creates the file, not its folder.
pub fn append_record(path: &Path, record: &RunRecord) -> Result<()> {
    let line = format_line(record);
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io("cannot open log", path, e))?;
    file.write_all(line.as_bytes())
        .map_err(|e| Error::io("write error", path, e))?;
    tracing::debug!(path = %path.display(), "run logged");
    Ok(())
}
