//! Probe execution against a single address
//!
//! A probe is one invocation of the external echo utility. Its stdout is
//! searched for the utility's reported round-trip time; any failure mode
//! (spawn error, timeout, abnormal exit, unparseable output) collapses into
//! a no-reply outcome and never crosses the task boundary as an error.

pub mod platform;

pub use platform::{echo_args, Platform};

use crate::models::{Config, ProbeOutcome};
use async_trait::async_trait;
use regex::Regex;
use std::process::Stdio;
use std::sync::OnceLock;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Latency pattern in the utility's stdout: `time=<float> ms`.
///
/// Deliberately as narrow as the output format it scrapes. Locales that
/// print decimal commas or translated unit strings will not match and the
/// probe counts as a failure.
fn latency_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"time=([0-9.]+)\s*ms").expect("latency pattern is a valid regex")
    })
}

/// Extract the reported round-trip time from probe output.
///
/// Returns the first `time=<float> ms` occurrence, or `None` when the
/// pattern is absent or the captured number does not parse.
pub fn parse_latency(output: &str) -> Option<f64> {
    latency_pattern()
        .captures(output)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// A single-address probe.
///
/// The production implementation spawns the OS echo utility; tests
/// substitute scripted implementations to exercise the pool and the
/// pipeline deterministically.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe one address. Never fails; failures are an outcome, not an error.
    async fn probe(&self, address: &str) -> ProbeOutcome;
}

/// Probe implementation backed by the OS ping utility.
pub struct PingProber {
    program: String,
    probe_timeout: Duration,
    platform: Platform,
}

impl PingProber {
    /// Create a prober from the run configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.probe_program.clone(),
            probe_timeout: config.probe_timeout(),
            platform: Platform::current(),
        }
    }

    /// Override the platform used for argument selection.
    #[cfg(test)]
    fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, address: &str) -> ProbeOutcome {
        let mut command = Command::new(&self.program);
        command
            .args(echo_args(self.platform, address))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        // The outer timeout bounds the whole child lifetime, independent of
        // whatever timeout semantics the utility itself has.
        let output = match timeout(self.probe_timeout, command.output()).await {
            Ok(Ok(output)) => output,
            // Spawn failure or timeout; the child is killed on drop.
            Ok(Err(_)) | Err(_) => return ProbeOutcome::no_reply(address),
        };

        // Exit status is ignored; only stdout text matters.
        let stdout = String::from_utf8_lossy(&output.stdout);
        match parse_latency(&stdout) {
            Some(latency_ms) => ProbeOutcome::reply(address, latency_ms),
            None => ProbeOutcome::no_reply(address),
        }
    }
}
