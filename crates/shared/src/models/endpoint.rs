use serde::{Deserialize, Serialize};
use std::fmt;

/// An endpoint that passed every probe, with its estimated per-call latency.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RankedEndpoint {
    pub url: String,
    pub latency_ms: u64,
}

impl fmt::Display for RankedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6} ms  {}", self.latency_ms, self.url)
    }
}
