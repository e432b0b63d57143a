use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Hostnames separated by new lines
    #[serde(default = "default_domains_file")]
    pub domains_file: String,

    /// DNS server IPs separated by new lines
    #[serde(default = "default_dns_servers_file")]
    pub dns_servers_file: String,

    /// Where matched headers are written, truncated on start
    #[serde(default = "default_results_file")]
    pub results_file: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            domains_file: default_domains_file(),
            dns_servers_file: default_dns_servers_file(),
            results_file: default_results_file(),
        }
    }
}

fn default_domains_file() -> String {
    "./data/uniq-domains.txt".to_string()
}

fn default_dns_servers_file() -> String {
    "./data/dns-servers.txt".to_string()
}

fn default_results_file() -> String {
    "./results.txt".to_string()
}
