//! Logging setup for the `kwcloud` binary.
//!
//! The library only emits `tracing` events; this installs a stderr subscriber
//! so SVG written to stdout stays clean. `RUST_LOG` overrides the verbosity
//! flag.

use tracing_subscriber::EnvFilter;

pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    // A second init (tests, embedding) keeps the existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
