use thiserror::Error;

/// Failure recorded on a single job.
///
/// None of these abort a run: the job still reaches the aggregator and is
/// counted as failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("DNS transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("DNS server {server} answered {status}")]
    Protocol { server: String, status: String },

    #[error("Empty results returned from lookup of {hostname}")]
    EmptyAnswer { hostname: String },

    #[error("No DNS resolver endpoints configured")]
    NoEndpoints,

    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Malformed DNS response from {server}: {reason}")]
    MalformedResponse { server: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Request(String),
}
