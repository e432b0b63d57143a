use async_trait::async_trait;
use ferrous_sweep_domain::ProbeError;
use std::net::Ipv4Addr;

/// Resolves a hostname to its IPv4 addresses.
///
/// Implementations make a single attempt: a failure is final for the job
/// that asked.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Returns the A records in answer order, never an empty list.
    async fn resolve(&self, hostname: &str) -> Result<Vec<Ipv4Addr>, ProbeError>;
}
