//! Command-line interface

use clap::Parser;

/// Ping Triage - rank host addresses by ICMP round-trip latency
///
/// Reads addresses from `ips.txt` in the working directory, probes each one
/// concurrently with the OS ping utility, and writes the answering
/// addresses to `ping_results.txt` sorted by latency. Paths, pool width
/// and probe timeout are fixed.
#[derive(Parser, Debug, Clone)]
#[command(name = "ping-triage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        Ok(())
    }
}
