//! Configuration module for Ferrous Sweep
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, loading and CLI overrides
//! - `run`: Worker count and queue capacity
//! - `input`: Hostname list, resolver list and results file locations
//! - `probe`: HTTP probe settings and the header of interest
//! - `dns`: DNS query settings
//! - `logging`: Logging settings
//! - `report`: Periodic progress reporting
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod input;
pub mod logging;
pub mod probe;
pub mod report;
pub mod root;
pub mod run;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use input::InputConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use probe::{ProbeConfig, ProbeScheme};
pub use report::ReportConfig;
pub use root::{CliOverrides, Config};
pub use run::RunConfig;
