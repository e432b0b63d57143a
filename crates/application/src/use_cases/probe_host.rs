use crate::ports::HeaderProbe;
use ferrous_sweep_domain::Job;
use http::header::{HeaderName, InvalidHeaderName};
use http::HeaderMap;
use std::sync::Arc;
use tracing::debug;

/// Use case: probe one job's hostname and record the header of interest
pub struct ProbeHostUseCase {
    probe: Arc<dyn HeaderProbe>,
    header: HeaderName,
}

impl ProbeHostUseCase {
    pub fn new(probe: Arc<dyn HeaderProbe>, header: &str) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            probe,
            header: HeaderName::from_bytes(header.as_bytes())?,
        })
    }

    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    /// Writes the outcome onto the job: the header value on success
    /// (empty when absent), the failure otherwise. Never retries.
    pub async fn execute(&self, job: &mut Job) {
        match self.probe.probe(&job.hostname).await {
            Ok(headers) => {
                job.result = extract_header(&headers, &self.header);
                debug!(
                    id = job.id,
                    hostname = %job.hostname,
                    found = !job.result.is_empty(),
                    "Probe completed"
                );
            }
            Err(e) => {
                job.error = Some(e);
            }
        }
    }
}

/// First value of `name`, or an empty string when it is missing or not
/// visible ASCII.
pub fn extract_header(headers: &HeaderMap, name: &HeaderName) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
