use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_sweep_domain::ProbeError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport.
///
/// Every query binds a fresh ephemeral socket; nothing is shared between
/// concurrent lookups.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn transport_error(&self, reason: impl Into<String>) -> ProbeError {
        ProbeError::Transport {
            server: self.server_addr.to_string(),
            reason: reason.into(),
        }
    }

    async fn exchange(
        &self,
        message_bytes: &[u8],
        deadline: Instant,
    ) -> Result<TransportResponse, ProbeError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.transport_error(format!("failed to bind UDP socket: {}", e)))?;

        let bytes_sent =
            tokio::time::timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.transport_error("timeout sending UDP query"))?
                .map_err(|e| self.transport_error(format!("failed to send UDP query: {}", e)))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| self.transport_error("timeout waiting for UDP response"))?
                    .map_err(|e| {
                        self.transport_error(format!("failed to receive UDP response: {}", e))
                    })?;

            // Only the queried server may answer
            if from_addr.ip() != self.server_addr.ip() {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );

            return Ok(TransportResponse {
                bytes: recv_buf,
                protocol_used: "UDP",
            });
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, ProbeError> {
        self.exchange(message_bytes, Instant::now() + timeout).await
    }

    fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}
