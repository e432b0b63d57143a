use ferrous_sweep_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber is installed, so it honours the configured format.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        workers = config.run.workers,
        buffer_size = config.run.buffer_size,
        domains_file = %config.input.domains_file,
        dns_servers_file = %config.input.dns_servers_file,
        results_file = %config.input.results_file,
        header = %config.probe.header,
        scheme = %config.probe.scheme,
        "Configuration loaded"
    );
}
