use serde::{Deserialize, Serialize};

/// Periodic progress report
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Seconds between reports; 0 disables them (default: 5)
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
        }
    }
}

fn default_interval() -> u64 {
    5
}
