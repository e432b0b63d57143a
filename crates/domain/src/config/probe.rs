use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProbeScheme {
    #[default]
    Http,
    Https,
}

impl ProbeScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for ProbeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP probe configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Response header extracted from every probe (default: "X-Recruiting")
    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default)]
    pub scheme: ProbeScheme,

    /// Target port; 0 means the scheme's default port
    #[serde(default)]
    pub port: u16,

    /// Total request timeout in seconds (default: 60)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Targets are addressed by raw IP, so hostname verification cannot apply
    #[serde(default = "default_true")]
    pub accept_invalid_certs: bool,
}

impl ProbeConfig {
    pub fn port_override(&self) -> Option<u16> {
        (self.port != 0).then_some(self.port)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            scheme: ProbeScheme::default(),
            port: 0,
            request_timeout_secs: default_request_timeout(),
            accept_invalid_certs: default_true(),
        }
    }
}

fn default_header() -> String {
    "X-Recruiting".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

