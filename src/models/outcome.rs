//! Probe outcome and batch report data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single probe against one address
///
/// Every failure mode of a probe (spawn failure, timeout, unparseable
/// output, abnormal exit) collapses into `NoReply`; no per-address error
/// detail is retained. The address is kept on the failure side only so the
/// batch invariant stays checkable and the summary can count failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProbeOutcome {
    /// The address answered the echo request
    Reply {
        address: String,
        /// Round-trip time reported by the probe utility, in milliseconds
        latency_ms: f64,
    },
    /// No usable answer within the probe bound
    NoReply { address: String },
}

impl ProbeOutcome {
    /// Create a successful outcome
    pub fn reply(address: impl Into<String>, latency_ms: f64) -> Self {
        Self::Reply {
            address: address.into(),
            latency_ms,
        }
    }

    /// Create a failed outcome
    pub fn no_reply(address: impl Into<String>) -> Self {
        Self::NoReply {
            address: address.into(),
        }
    }

    /// Check if this probe got an answer
    pub fn is_reply(&self) -> bool {
        matches!(self, Self::Reply { .. })
    }

    /// The probed address, regardless of outcome
    pub fn address(&self) -> &str {
        match self {
            Self::Reply { address, .. } | Self::NoReply { address } => address,
        }
    }

    /// Measured latency, if the address answered
    pub fn latency_ms(&self) -> Option<f64> {
        match self {
            Self::Reply { latency_ms, .. } => Some(*latency_ms),
            Self::NoReply { .. } => None,
        }
    }
}

/// Fan-in product of a full probe batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// One outcome per submitted address, order unspecified
    pub outcomes: Vec<ProbeOutcome>,
    /// Timestamp when the batch was submitted
    pub started_at: DateTime<Utc>,
    /// Timestamp when the last probe returned
    pub completed_at: DateTime<Utc>,
}

impl BatchReport {
    /// Create a new report from collected outcomes
    pub fn new(
        outcomes: Vec<ProbeOutcome>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            outcomes,
            started_at,
            completed_at,
        }
    }

    /// Total number of probes executed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of addresses that answered
    pub fn reply_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_reply()).count()
    }

    /// Number of addresses that did not answer
    pub fn no_reply_count(&self) -> usize {
        self.total() - self.reply_count()
    }

    /// Get the fastest answering address, if any answered
    pub fn fastest(&self) -> Option<(&str, f64)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.latency_ms().map(|ms| (o.address(), ms)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BatchReport {
        let now = Utc::now();
        BatchReport::new(
            vec![
                ProbeOutcome::reply("10.0.0.1", 12.9),
                ProbeOutcome::no_reply("10.255.255.1"),
                ProbeOutcome::reply("10.0.0.2", 3.4),
            ],
            now,
            now,
        )
    }

    #[test]
    fn test_outcome_accessors() {
        let reply = ProbeOutcome::reply("127.0.0.1", 0.05);
        assert!(reply.is_reply());
        assert_eq!(reply.address(), "127.0.0.1");
        assert_eq!(reply.latency_ms(), Some(0.05));

        let no_reply = ProbeOutcome::no_reply("10.255.255.1");
        assert!(!no_reply.is_reply());
        assert_eq!(no_reply.address(), "10.255.255.1");
        assert_eq!(no_reply.latency_ms(), None);
    }

    #[test]
    fn test_report_counts() {
        let report = sample_report();
        assert_eq!(report.total(), 3);
        assert_eq!(report.reply_count(), 2);
        assert_eq!(report.no_reply_count(), 1);
    }

    #[test]
    fn test_fastest_address() {
        let report = sample_report();
        assert_eq!(report.fastest(), Some(("10.0.0.2", 3.4)));
    }

    #[test]
    fn test_fastest_with_no_replies() {
        let now = Utc::now();
        let report = BatchReport::new(vec![ProbeOutcome::no_reply("10.255.255.1")], now, now);
        assert_eq!(report.fastest(), None);
    }
}
