//! Configuration assembly from CLI arguments

use crate::cli::Cli;
use crate::error::Result;
use crate::models::Config;

/// Build the run configuration from CLI arguments.
///
/// Only ambient flags (color, verbosity) come from the CLI; paths, worker
/// count and probe timeout stay at their fixed defaults.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::default();

    if cli.no_color {
        config.enable_color = false;
    }
    config.verbose = cli.verbose;
    config.debug = cli.debug;

    config.validate()?;

    Ok(config)
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Input: {}", config.input_path.display()));
    summary.push(format!("Output: {}", config.output_path.display()));
    summary.push(format!("Probe program: {}", config.probe_program));
    summary.push(format!("Worker pool width: {}", config.worker_count));
    summary.push(format!("Probe timeout: {}s", config.probe_timeout_seconds));
    summary.push(format!("Color output: {}", config.enable_color));

    summary.join("\n")
}
