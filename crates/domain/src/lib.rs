//! Ferrous Sweep Domain Layer
pub mod config;
pub mod errors;
pub mod job;
pub mod resolver_config;
pub mod stats;

pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use errors::ProbeError;
pub use job::Job;
pub use resolver_config::{ResolverConfig, DEFAULT_DNS_PORT};
pub use stats::{Progress, RunStats};
