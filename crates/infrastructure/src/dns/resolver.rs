use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::udp::UdpTransport;
use super::transport::DnsTransport;
use async_trait::async_trait;
use ferrous_sweep_application::ports::DnsResolver;
use ferrous_sweep_domain::{ProbeError, ResolverConfig};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

/// Resolver that sends each lookup to one endpoint picked uniformly at
/// random from the loaded set.
///
/// There is no endpoint affinity, no health tracking and no retry: a failed
/// exchange is returned as is.
pub struct UpstreamResolver {
    transports: Vec<Box<dyn DnsTransport>>,
    timeout: Duration,
}

impl UpstreamResolver {
    /// One UDP transport per configured endpoint.
    pub fn new(config: &ResolverConfig, timeout: Duration) -> Self {
        let transports = config
            .endpoints()
            .iter()
            .map(|addr| Box::new(UdpTransport::new(*addr)) as Box<dyn DnsTransport>)
            .collect();
        Self::with_transports(transports, timeout)
    }

    pub fn with_transports(transports: Vec<Box<dyn DnsTransport>>, timeout: Duration) -> Self {
        if transports.is_empty() {
            warn!("No DNS resolver endpoints loaded; every lookup will fail");
        }
        Self {
            transports,
            timeout,
        }
    }

    pub fn endpoint_count(&self) -> usize {
        self.transports.len()
    }

    /// Address of a randomly chosen endpoint, `None` when the set is empty.
    pub fn select_endpoint(&self) -> Option<SocketAddr> {
        self.pick().map(|t| t.server_addr())
    }

    fn pick(&self) -> Option<&dyn DnsTransport> {
        if self.transports.is_empty() {
            return None;
        }
        let index = fastrand::usize(..self.transports.len());
        Some(self.transports[index].as_ref())
    }
}

#[async_trait]
impl DnsResolver for UpstreamResolver {
    async fn resolve(&self, hostname: &str) -> Result<Vec<Ipv4Addr>, ProbeError> {
        let transport = self.pick().ok_or(ProbeError::NoEndpoints)?;
        let server = transport.server_addr();

        let (id, query_bytes) = MessageBuilder::build_a_query(hostname)?;
        let response = transport.send(&query_bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes, server)?;

        if parsed.id != id {
            return Err(ProbeError::MalformedResponse {
                server: server.to_string(),
                reason: format!("response id {} does not match query id {}", parsed.id, id),
            });
        }

        if !parsed.is_success() {
            return Err(ProbeError::Protocol {
                server: server.to_string(),
                status: parsed.status(),
            });
        }

        if parsed.addresses.is_empty() {
            return Err(ProbeError::EmptyAnswer {
                hostname: hostname.to_string(),
            });
        }

        debug!(
            hostname = hostname,
            server = %server,
            protocol = response.protocol_used,
            addresses = parsed.addresses.len(),
            "Hostname resolved"
        );

        Ok(parsed.addresses)
    }
}
