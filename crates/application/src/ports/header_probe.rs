use async_trait::async_trait;
use ferrous_sweep_domain::ProbeError;
use http::HeaderMap;

/// Issues one header-only request for a hostname and hands back the
/// response headers.
#[async_trait]
pub trait HeaderProbe: Send + Sync {
    async fn probe(&self, hostname: &str) -> Result<HeaderMap, ProbeError>;
}
