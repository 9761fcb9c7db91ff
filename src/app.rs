//! Main application orchestration and execution

use crate::error::Result;
use crate::executor::ProbeExecutor;
use crate::hosts;
use crate::models::{BatchReport, Config};
use crate::output;
use crate::probe::{PingProber, Prober};
use std::sync::Arc;

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance with the run configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the full triage: load addresses, probe them, write ranked results.
    pub async fn run(&self) -> Result<BatchReport> {
        let prober: Arc<dyn Prober> = Arc::new(PingProber::new(&self.config));
        self.run_with_prober(prober).await
    }

    /// Run the triage with an explicit probe implementation.
    ///
    /// The seam tests use to substitute a scripted prober for the OS
    /// utility.
    pub async fn run_with_prober(&self, prober: Arc<dyn Prober>) -> Result<BatchReport> {
        self.config.validate()?;

        println!("Reading addresses from {}...", self.config.input_path.display());
        let addresses = hosts::load_addresses(&self.config.input_path)?;
        println!("Found {} addresses to probe", addresses.len());

        if self.config.verbose {
            println!(
                "Worker pool width: {}, probe timeout: {}s",
                self.config.worker_count, self.config.probe_timeout_seconds
            );
        }

        println!();
        println!("Starting probes...");

        let executor =
            ProbeExecutor::new(prober, self.config.worker_count).with_debug(self.config.debug);
        let report = executor.execute_batch(&addresses).await;

        println!();
        println!("{}", output::format_summary(&report, self.config.enable_color));

        output::write_ranked(&report.outcomes, &self.config.output_path)?;

        println!();
        println!(
            "Results saved to {} (sorted by latency)",
            self.config.output_path.display()
        );

        Ok(report)
    }
}
