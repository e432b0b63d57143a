use ferrous_sweep_application::ports::FoundSink;
use ferrous_sweep_domain::{Job, Progress, RunStats};
use tokio::sync::{mpsc, watch};
use tracing::{debug, error};

/// Single consumer of the completed queue and sole writer of [`RunStats`].
pub struct Aggregator {
    stats: RunStats,
    sink: Option<Box<dyn FoundSink>>,
    progress_tx: watch::Sender<Progress>,
}

impl Aggregator {
    pub fn new(
        stats: RunStats,
        sink: Option<Box<dyn FoundSink>>,
        progress_tx: watch::Sender<Progress>,
    ) -> Self {
        Self {
            stats,
            sink,
            progress_tx,
        }
    }

    /// Drains the completed queue until it is closed and empty.
    pub async fn run(mut self, mut completed_rx: mpsc::Receiver<Job>) -> RunStats {
        while let Some(job) = completed_rx.recv().await {
            if let Some(e) = &job.error {
                error!(hostname = %job.hostname, error = %e, "Failed to probe hostname");
            }

            if let Some(found) = self.stats.record(job) {
                debug!(job = %found, "Header found");
                if let Some(sink) = self.sink.as_mut() {
                    sink.on_found(found);
                }
            }

            self.progress_tx.send_replace(self.stats.progress());
        }

        self.stats.finish();
        self.stats
    }
}
