//! timeit CLI — run, time, and log a companion binary.

use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr only when `TIMEIT_LOG` is set, so the
/// companion's forwarded stderr is untouched by default.
fn init_tracing() {
    if let Ok(filter) = EnvFilter::try_from_env("TIMEIT_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() {
    init_tracing();
    match timeit::cli::dispatch(std::env::args_os()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", e.report());
            std::process::exit(1);
        }
    }
}
