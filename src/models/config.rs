//! Configuration data model and validation

use crate::defaults;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
///
/// The triage tool exposes no user-facing configuration surface: paths,
/// worker count and timeout are fixed constants. They are still carried in
/// an explicit structure so tests can point the run at a temporary
/// directory or substitute a scripted probe command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path the address list is read from
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Path the ranked results are written to
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Width of the probe worker pool
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    /// Per-probe timeout in seconds
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_seconds: u64,

    /// External echo utility to invoke
    #[serde(default = "default_probe_program")]
    pub probe_program: String,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            worker_count: default_worker_count(),
            probe_timeout_seconds: default_probe_timeout_secs(),
            probe_program: default_probe_program(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the per-probe timeout as Duration
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(AppError::config("Input path cannot be empty"));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::config("Output path cannot be empty"));
        }

        if self.probe_program.is_empty() {
            return Err(AppError::config("Probe program cannot be empty"));
        }

        if self.worker_count == 0 {
            return Err(AppError::config("Worker count must be greater than 0"));
        }

        if self.worker_count > 64 {
            return Err(AppError::config("Worker count cannot exceed 64"));
        }

        if self.probe_timeout_seconds == 0 {
            return Err(AppError::config("Probe timeout must be greater than 0"));
        }

        if self.probe_timeout_seconds > 300 {
            return Err(AppError::config("Probe timeout cannot exceed 300 seconds"));
        }

        Ok(())
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from(defaults::INPUT_FILE)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_FILE)
}

fn default_worker_count() -> usize {
    defaults::WORKER_COUNT
}

fn default_probe_timeout_secs() -> u64 {
    defaults::PROBE_TIMEOUT.as_secs()
}

fn default_probe_program() -> String {
    defaults::PROBE_PROGRAM.to_string()
}

fn default_enable_color() -> bool {
    defaults::DEFAULT_ENABLE_COLOR
}
