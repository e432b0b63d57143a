use ferrous_sweep_domain::stats::throughput;
use ferrous_sweep_domain::{Progress, RunStats};
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Logs a progress line every `interval` until `cancel` fires.
pub fn spawn_reporter(
    progress: watch::Receiver<Progress>,
    started_at: Instant,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let snapshot = *progress.borrow();
                    log_progress(&snapshot, started_at.elapsed());
                }
            }
        }
    })
}

pub fn log_progress(progress: &Progress, elapsed: Duration) {
    info!(
        completed = progress.completed,
        failed = progress.failed,
        found = progress.matched,
        frequency = %format_frequency(progress.completed, elapsed),
        "Progress"
    );
}

pub fn log_final_report(stats: &RunStats) {
    let hostnames: Vec<&str> = stats
        .matched
        .iter()
        .map(|job| job.hostname.as_str())
        .collect();

    info!(
        completed = stats.completed,
        failed = stats.failed,
        found = stats.matched_count(),
        frequency = %stats.frequency(),
        elapsed_ms = stats.elapsed().as_millis() as u64,
        matched = ?hostnames,
        "Final report"
    );
}

fn format_frequency(completed: u64, elapsed: Duration) -> String {
    format!("{:.2} req/s", throughput(completed, elapsed))
}
