#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_sweep_application::ports::DnsResolver;
use ferrous_sweep_domain::ProbeError;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Resolver double returning the same outcome for every hostname.
pub struct StaticResolver {
    outcome: Result<Vec<Ipv4Addr>, ProbeError>,
    call_count: Arc<AtomicU64>,
}

impl StaticResolver {
    pub fn with_addresses(addresses: Vec<Ipv4Addr>) -> Self {
        Self {
            outcome: Ok(addresses),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn localhost() -> Self {
        Self::with_addresses(vec![Ipv4Addr::LOCALHOST])
    }

    pub fn failing(error: ProbeError) -> Self {
        Self {
            outcome: Err(error),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DnsResolver for StaticResolver {
    async fn resolve(&self, _hostname: &str) -> Result<Vec<Ipv4Addr>, ProbeError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.outcome.clone()
    }
}
