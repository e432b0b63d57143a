pub mod udp;

use async_trait::async_trait;
use ferrous_sweep_domain::ProbeError;
use std::net::SocketAddr;
use std::time::Duration;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// One query, one response, bounded by `timeout`.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, ProbeError>;

    fn server_addr(&self) -> SocketAddr;
}
