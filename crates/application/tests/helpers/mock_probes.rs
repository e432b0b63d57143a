#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_sweep_application::ports::HeaderProbe;
use ferrous_sweep_domain::ProbeError;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ============================================================================
// Mock HeaderProbe
// ============================================================================

pub struct MockHeaderProbe {
    responses: HashMap<String, Result<HeaderMap, ProbeError>>,
    call_count: Arc<AtomicU64>,
}

impl MockHeaderProbe {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_header(mut self, hostname: &str, name: &str, value: &[u8]) -> Self {
        let mut headers = HeaderMap::new();
        headers.append(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_bytes(value).unwrap(),
        );
        self.responses.insert(hostname.to_string(), Ok(headers));
        self
    }

    pub fn with_headers(mut self, hostname: &str, headers: HeaderMap) -> Self {
        self.responses.insert(hostname.to_string(), Ok(headers));
        self
    }

    pub fn with_error(mut self, hostname: &str, error: ProbeError) -> Self {
        self.responses.insert(hostname.to_string(), Err(error));
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HeaderProbe for MockHeaderProbe {
    async fn probe(&self, hostname: &str) -> Result<HeaderMap, ProbeError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.responses
            .get(hostname)
            .cloned()
            .unwrap_or_else(|| Ok(HeaderMap::new()))
    }
}
