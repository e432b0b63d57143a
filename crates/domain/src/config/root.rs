use super::{
    ConfigError, DnsConfig, InputConfig, LogFormat, LoggingConfig, ProbeConfig, ReportConfig,
    RunConfig,
};
use http::HeaderName;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub probe: ProbeConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Values passed on the command line; every `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub workers: Option<usize>,
    pub buffer_size: Option<usize>,
    pub domains_file: Option<String>,
    pub dns_servers_file: Option<String>,
    pub results_file: Option<String>,
    pub header: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub report_interval_secs: Option<u64>,
}

impl Config {
    /// Loads the TOML file when a path is given, otherwise starts from
    /// defaults, then applies CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                        path: path.to_string(),
                        source,
                    })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(workers) = overrides.workers {
            self.run.workers = workers;
        }
        if let Some(buffer_size) = overrides.buffer_size {
            self.run.buffer_size = buffer_size;
        }
        if let Some(domains_file) = overrides.domains_file {
            self.input.domains_file = domains_file;
        }
        if let Some(dns_servers_file) = overrides.dns_servers_file {
            self.input.dns_servers_file = dns_servers_file;
        }
        if let Some(results_file) = overrides.results_file {
            self.input.results_file = results_file;
        }
        if let Some(header) = overrides.header {
            self.probe.header = header;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
        if let Some(interval) = overrides.report_interval_secs {
            self.report.interval_secs = interval;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.workers == 0 {
            return Err(ConfigError::Validation(
                "run.workers must be greater than 0".to_string(),
            ));
        }
        if self.run.buffer_size == 0 {
            return Err(ConfigError::Validation(
                "run.buffer_size must be greater than 0".to_string(),
            ));
        }
        if HeaderName::from_bytes(self.probe.header.as_bytes()).is_err() {
            return Err(ConfigError::Validation(format!(
                "probe.header '{}' is not a valid HTTP header name",
                self.probe.header
            )));
        }
        if self.probe.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "probe.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "dns.query_timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
