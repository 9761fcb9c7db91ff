//! Ping Triage
//!
//! A concurrent reachability triage tool that probes a list of host
//! addresses via the OS ping utility and writes back a ranked list of the
//! addresses that responded, sorted by round-trip latency.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod hosts;
pub mod models;
pub mod output;
pub mod probe;

// Re-export commonly used types
pub use app::App;
pub use error::{AppError, Result};
pub use models::{BatchReport, Config, ProbeOutcome};
pub use probe::{PingProber, Prober};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    /// Fixed relative path the address list is read from.
    pub const INPUT_FILE: &str = "ips.txt";
    /// Fixed relative path the ranked results are written to.
    pub const OUTPUT_FILE: &str = "ping_results.txt";
    /// Width of the probe worker pool.
    pub const WORKER_COUNT: usize = 5;
    /// Safety bound on a single probe, independent of the utility's own timeout.
    pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
    /// Name of the external echo utility.
    pub const PROBE_PROGRAM: &str = "ping";
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
