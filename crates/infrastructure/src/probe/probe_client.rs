use async_trait::async_trait;
use ferrous_sweep_application::ports::{DnsResolver, HeaderProbe};
use ferrous_sweep_domain::config::{ProbeConfig, ProbeScheme};
use ferrous_sweep_domain::ProbeError;
use http::header::{CONNECTION, HOST};
use http::HeaderMap;
use std::error::Error as StdError;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Builds the outbound client shared by every worker.
///
/// Targets are addressed by raw IP, so certificate checks are relaxed when
/// configured; keep-alive is off (`Connection: close` per request) and at
/// most one idle connection is cached per target.
pub fn build_http_client(config: &ProbeConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .pool_max_idle_per_host(1)
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
}

/// Resolves a hostname through the injected resolver, then sends one HEAD
/// request to the first address with the hostname as virtual host.
pub struct HttpProbeClient {
    resolver: Arc<dyn DnsResolver>,
    client: reqwest::Client,
    scheme: ProbeScheme,
    port: Option<u16>,
}

impl HttpProbeClient {
    pub fn new(
        resolver: Arc<dyn DnsResolver>,
        client: reqwest::Client,
        config: &ProbeConfig,
    ) -> Self {
        Self {
            resolver,
            client,
            scheme: config.scheme,
            port: config.port_override(),
        }
    }

    pub fn target_url(&self, ip: Ipv4Addr) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}/", self.scheme, ip, port),
            None => format!("{}://{}/", self.scheme, ip),
        }
    }
}

#[async_trait]
impl HeaderProbe for HttpProbeClient {
    async fn probe(&self, hostname: &str) -> Result<HeaderMap, ProbeError> {
        let addresses = self.resolver.resolve(hostname).await?;

        // Only the first address is tried
        let ip = addresses
            .first()
            .copied()
            .ok_or_else(|| ProbeError::EmptyAnswer {
                hostname: hostname.to_string(),
            })?;
        let url = self.target_url(ip);

        let response = self
            .client
            .head(&url)
            .header(HOST, hostname)
            .header(CONNECTION, "close")
            .send()
            .await
            .map_err(|e| ProbeError::Request(error_chain(&e)))?;

        debug!(
            hostname = hostname,
            url = %url,
            status = response.status().as_u16(),
            "Probe response received"
        );

        let headers = response.headers().clone();

        // Drain whatever body there is so the connection is released
        if let Err(e) = response.bytes().await {
            debug!(hostname = hostname, error = %e, "Failed to drain probe response body");
        }

        Ok(headers)
    }
}

/// `reqwest` keeps the useful part of an error (refused, timed out, ...)
/// in its source chain.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
