use crate::ConfigError;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;

/// Port appended to resolver entries that do not carry one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Immutable set of DNS resolver endpoints, loaded once at startup.
///
/// Order is irrelevant: every resolution picks one endpoint at random.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    endpoints: Vec<SocketAddr>,
}

impl ResolverConfig {
    pub fn new(endpoints: Vec<SocketAddr>) -> Self {
        Self { endpoints }
    }

    /// Reads a newline-separated resolver list from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses one endpoint per line.
    ///
    /// A line is either a bare IPv4 address, which gets [`DEFAULT_DNS_PORT`],
    /// or an explicit `ipv4:port`. Blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut endpoints = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let endpoint = parse_endpoint(line).ok_or_else(|| ConfigError::InvalidResolver {
                line: index + 1,
                value: line.to_string(),
            })?;
            endpoints.push(endpoint);
        }

        Ok(Self { endpoints })
    }

    pub fn endpoints(&self) -> &[SocketAddr] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

fn parse_endpoint(value: &str) -> Option<SocketAddr> {
    if let Ok(ip) = value.parse::<Ipv4Addr>() {
        return Some(SocketAddr::V4(SocketAddrV4::new(ip, DEFAULT_DNS_PORT)));
    }
    value.parse::<SocketAddrV4>().ok().map(SocketAddr::V4)
}
