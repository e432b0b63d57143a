//! # Ferrous Sweep
//!
//! Bulk hostname prober: resolves every hostname in a list through a pool of
//! DNS resolvers, sends one HEAD request to the first address, and records the
//! hostnames that answer with a chosen response header.

mod bootstrap;
mod report;
mod results;

use anyhow::Context;
use clap::Parser;
use ferrous_sweep_application::use_cases::ProbeHostUseCase;
use ferrous_sweep_domain::{CliOverrides, LogFormat, ResolverConfig};
use ferrous_sweep_infrastructure::dns::UpstreamResolver;
use ferrous_sweep_infrastructure::probe::{build_http_client, HttpProbeClient};
use ferrous_sweep_jobs::SweepRunner;
use results::ResultsWriter;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ferrous-sweep")]
#[command(version)]
#[command(about = "Probe a list of hostnames for a response header")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Number of concurrent probe workers
    #[arg(short = 'w', long)]
    workers: Option<usize>,

    /// Capacity of the job and completed queues
    #[arg(short = 'b', long)]
    buffer: Option<usize>,

    /// File with one hostname per line
    #[arg(long)]
    domains_file: Option<String>,

    /// File with one resolver per line (IP or IP:port)
    #[arg(long)]
    dns_file: Option<String>,

    /// Where matched hostnames are written
    #[arg(long)]
    results_file: Option<String>,

    /// Response header to look for
    #[arg(long)]
    header: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    logs_level: Option<String>,

    /// Log output format (text or json)
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Seconds between progress reports, 0 disables them
    #[arg(long)]
    report_interval: Option<u64>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            workers: self.workers,
            buffer_size: self.buffer,
            domains_file: self.domains_file.clone(),
            dns_servers_file: self.dns_file.clone(),
            results_file: self.results_file.clone(),
            header: self.header.clone(),
            log_level: self.logs_level.clone(),
            log_format: self.log_format,
            report_interval_secs: self.report_interval,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);
    bootstrap::config::log_config(cli.config.as_deref(), &config);

    let resolver_config = ResolverConfig::load(&config.input.dns_servers_file)
        .context("Failed to load DNS resolver list")?;
    info!(
        endpoints = resolver_config.len(),
        path = %config.input.dns_servers_file,
        "Resolver endpoints loaded"
    );

    let domains = tokio::fs::File::open(&config.input.domains_file)
        .await
        .with_context(|| format!("Failed to open domains file {}", config.input.domains_file))?;

    let results = ResultsWriter::create(&config.input.results_file)
        .with_context(|| format!("Failed to create results file {}", config.input.results_file))?;

    let client = build_http_client(&config.probe).context("Failed to build HTTP client")?;

    let resolver = Arc::new(UpstreamResolver::new(
        &resolver_config,
        Duration::from_millis(config.dns.query_timeout_ms),
    ));
    let probe = Arc::new(HttpProbeClient::new(resolver, client, &config.probe));
    let use_case = Arc::new(
        ProbeHostUseCase::new(probe, &config.probe.header)
            .context("Invalid header name")?,
    );

    let runner = SweepRunner::new(use_case)
        .with_workers(config.run.workers)
        .with_queue_capacity(config.run.buffer_size)
        .with_found_sink(results);

    let cancel = CancellationToken::new();
    let reporter = (config.report.interval_secs > 0).then(|| {
        report::spawn_reporter(
            runner.progress(),
            Instant::now(),
            Duration::from_secs(config.report.interval_secs),
            cancel.clone(),
        )
    });

    let stats = runner
        .run(BufReader::new(domains))
        .await
        .context("Sweep pipeline failed")?;

    cancel.cancel();
    if let Some(reporter) = reporter {
        if let Err(e) = reporter.await {
            error!(error = %e, "Progress reporter failed");
        }
    }

    report::log_final_report(&stats);

    Ok(())
}
