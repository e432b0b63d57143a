use crate::ProbeError;
use std::fmt;

/// One hostname moving through the pipeline.
///
/// Created by the domain source, mutated once by the worker that probes it,
/// then handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: u64,
    pub hostname: String,
    /// Value of the header of interest; empty when absent.
    pub result: String,
    pub error: Option<ProbeError>,
}

impl Job {
    pub fn new(id: u64, hostname: impl Into<String>) -> Self {
        Self {
            id,
            hostname: hostname.into(),
            result: String::new(),
            error: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// A job is matched iff it completed without error and carries a
    /// non-empty header value.
    pub fn is_matched(&self) -> bool {
        self.error.is_none() && !self.result.is_empty()
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, domain: {}, header: {}",
            self.id, self.hostname, self.result
        )
    }
}
