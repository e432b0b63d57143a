use serde::{Deserialize, Serialize};

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Deadline for one query/response exchange in milliseconds (default: 2000)
    #[serde(default = "default_query_timeout")]
    pub query_timeout_ms: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout(),
        }
    }
}

fn default_query_timeout() -> u64 {
    2000
}
