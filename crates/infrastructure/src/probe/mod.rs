pub mod probe_client;

pub use probe_client::{build_http_client, HttpProbeClient};
