//! CLI support for the crewrun binaries: argument types, logging setup,
//! and the result printer shared by both runners.

pub mod commands;
pub mod console;

use tracing_subscriber::EnvFilter;

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr; stdout carries only the extracted result.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"), // -vvv or more
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
