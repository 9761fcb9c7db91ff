//! Bounded-concurrency probe batch execution
//!
//! Fans a batch of addresses out over a fixed-width worker pool and fans
//! the outcomes back in. The caller blocks until every probe has returned;
//! there is no early-exit or cancellation path.

use crate::models::{BatchReport, ProbeOutcome};
use crate::probe::Prober;
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Executes probe batches against a fixed-width worker pool.
pub struct ProbeExecutor {
    prober: Arc<dyn Prober>,
    /// Bounds simultaneous probes; excess tasks queue on the semaphore.
    limiter: Arc<Semaphore>,
    debug: bool,
}

impl ProbeExecutor {
    /// Create an executor over `prober` with at most `worker_count`
    /// probes in flight.
    pub fn new(prober: Arc<dyn Prober>, worker_count: usize) -> Self {
        Self {
            prober,
            limiter: Arc::new(Semaphore::new(worker_count)),
            debug: false,
        }
    }

    /// Enable per-address debug notes on stderr.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Probe every address and collect one outcome per address.
    ///
    /// Probes are fully independent; a slow or hung probe holds one pool
    /// slot for at most its timeout bound. A panicked task degrades to a
    /// no-reply outcome rather than aborting the batch, so the returned
    /// report always carries exactly `addresses.len()` outcomes.
    pub async fn execute_batch(&self, addresses: &[String]) -> BatchReport {
        let started_at = Utc::now();

        let mut tasks = Vec::with_capacity(addresses.len());
        for address in addresses {
            let prober = Arc::clone(&self.prober);
            let limiter = Arc::clone(&self.limiter);
            let address = address.clone();
            let debug = self.debug;

            tasks.push(tokio::spawn(async move {
                let _permit = match limiter.acquire_owned().await {
                    Ok(permit) => permit,
                    // The semaphore is never closed; treat it as a failed probe.
                    Err(_) => return ProbeOutcome::no_reply(address),
                };

                let outcome = prober.probe(&address).await;
                if debug && !outcome.is_reply() {
                    eprintln!("No reply from {}", address);
                }
                outcome
            }));
        }

        let mut outcomes = Vec::with_capacity(addresses.len());
        for (task, address) in join_all(tasks).await.into_iter().zip(addresses) {
            outcomes.push(match task {
                Ok(outcome) => outcome,
                Err(_) => ProbeOutcome::no_reply(address.clone()),
            });
        }

        debug_assert_eq!(outcomes.len(), addresses.len());
        BatchReport::new(outcomes, started_at, Utc::now())
    }
}
