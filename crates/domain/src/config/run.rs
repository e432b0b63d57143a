use serde::{Deserialize, Serialize};

/// Pipeline sizing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Number of concurrent workers (default: 250)
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Capacity of the job queue and of the completed queue (default: 1000).
    /// Lower values mean less memory in flight.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            buffer_size: default_buffer_size(),
        }
    }
}

fn default_workers() -> usize {
    250
}

fn default_buffer_size() -> usize {
    1000
}
