/// Sweep Flow Tests
///
/// Full pipeline against local stubs:
/// Hostname file → Source → Workers (UDP resolve → HEAD) → Aggregator → found sink

#[path = "../common/mod.rs"]
mod common;
use common::{build_use_case, write_lines, DnsStub, HttpStub, TestHosts, HEADER};

use ferrous_sweep_domain::Job;
use ferrous_sweep_jobs::SweepRunner;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::BufReader;

const QUERY_TIMEOUT: Duration = Duration::from_secs(2);

fn headers(host: &str, name: &str, value: &str) -> HashMap<String, Vec<(String, String)>> {
    HashMap::from([(
        host.to_string(),
        vec![(name.to_string(), value.to_string())],
    )])
}

async fn open(path: &std::path::Path) -> BufReader<tokio::fs::File> {
    BufReader::new(tokio::fs::File::open(path).await.unwrap())
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn test_single_hiring_host_is_reported() {
    let hosts = [TestHosts::plain(), TestHosts::hiring(), TestHosts::other()];
    let dns = DnsStub::start(TestHosts::loopback_zone(&hosts)).await.unwrap();
    let http = HttpStub::start(headers(TestHosts::hiring(), HEADER, "yes"))
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let dns_file = write_lines(dir.path(), "dns-servers.txt", &[dns.endpoint_line()]);
    let domains = write_lines(
        dir.path(),
        "domains.txt",
        &hosts.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    );

    let found = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&found);

    let stats = SweepRunner::new(build_use_case(&dns_file, http.port(), QUERY_TIMEOUT))
        .with_workers(3)
        .with_queue_capacity(2)
        .with_found_sink(move |job: &Job| sink.lock().unwrap().push(job.to_string()))
        .run(open(&domains).await)
        .await
        .unwrap();

    assert_eq!(stats.completed, 3);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.matched_count(), 1);
    assert_eq!(
        *found.lock().unwrap(),
        vec!["id: 1, domain: b.com, header: yes".to_string()]
    );
    assert_eq!(dns.query_count(), 3);

    let requests = http.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.method == "HEAD"));
    let mut hosts_seen: Vec<_> = requests.into_iter().map(|r| r.host).collect();
    hosts_seen.sort();
    assert_eq!(hosts_seen, vec!["a.com", "b.com", "c.com"]);
}

#[tokio::test]
async fn test_header_lookup_ignores_case() {
    let dns = DnsStub::start(TestHosts::loopback_zone(&[TestHosts::hiring()]))
        .await
        .unwrap();
    let http = HttpStub::start(headers(TestHosts::hiring(), "x-recruiting", "we want you"))
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let dns_file = write_lines(dir.path(), "dns.txt", &[dns.endpoint_line()]);

    let use_case = build_use_case(&dns_file, http.port(), QUERY_TIMEOUT);
    let mut job = Job::new(0, TestHosts::hiring());
    use_case.execute(&mut job).await;

    assert!(job.is_matched());
    assert_eq!(job.result, "we want you");
}

#[tokio::test]
async fn test_blank_lines_in_domains_file_are_skipped() {
    let hosts = [TestHosts::plain(), TestHosts::hiring()];
    let dns = DnsStub::start(TestHosts::loopback_zone(&hosts)).await.unwrap();
    let http = HttpStub::start(headers(TestHosts::hiring(), HEADER, "1"))
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let dns_file = write_lines(dir.path(), "dns.txt", &[dns.endpoint_line()]);
    let domains = write_lines(
        dir.path(),
        "domains.txt",
        &["".to_string(), "a.com".to_string(), "".to_string(), "b.com".to_string()],
    );

    let stats = SweepRunner::new(build_use_case(&dns_file, http.port(), QUERY_TIMEOUT))
        .with_workers(2)
        .run(open(&domains).await)
        .await
        .unwrap();

    assert_eq!(stats.completed, 2);
    assert_eq!(stats.matched[0].id, 1);
    assert_eq!(stats.matched[0].hostname, "b.com");
}

// ============================================================================
// Resolver selection
// ============================================================================

#[tokio::test]
async fn test_queries_spread_over_every_resolver() {
    let names: Vec<String> = (0..60).map(|i| format!("host{i}.test")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let first = DnsStub::start(TestHosts::loopback_zone(&refs)).await.unwrap();
    let second = DnsStub::start(TestHosts::loopback_zone(&refs)).await.unwrap();
    let http = HttpStub::start(HashMap::new()).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let dns_file = write_lines(
        dir.path(),
        "dns.txt",
        &[
            "# local stubs".to_string(),
            first.endpoint_line(),
            second.endpoint_line(),
        ],
    );
    let domains = write_lines(dir.path(), "domains.txt", &names);

    let stats = SweepRunner::new(build_use_case(&dns_file, http.port(), QUERY_TIMEOUT))
        .with_workers(8)
        .run(open(&domains).await)
        .await
        .unwrap();

    assert_eq!(stats.completed, 60);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.matched_count(), 0);
    assert_eq!(first.query_count() + second.query_count(), 60);
    assert!(first.query_count() > 0);
    assert!(second.query_count() > 0);
}
