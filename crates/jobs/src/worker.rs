use ferrous_sweep_application::use_cases::ProbeHostUseCase;
use ferrous_sweep_domain::Job;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

/// One of N workers draining the shared job queue.
///
/// Each job is owned by exactly one worker while it is probed, then moved
/// onto the completed queue.
pub struct ProbeWorker {
    id: usize,
    use_case: Arc<ProbeHostUseCase>,
    jobs_rx: Arc<Mutex<mpsc::Receiver<Job>>>,
    completed_tx: mpsc::Sender<Job>,
}

impl ProbeWorker {
    pub fn new(
        id: usize,
        use_case: Arc<ProbeHostUseCase>,
        jobs_rx: Arc<Mutex<mpsc::Receiver<Job>>>,
        completed_tx: mpsc::Sender<Job>,
    ) -> Self {
        Self {
            id,
            use_case,
            jobs_rx,
            completed_tx,
        }
    }

    /// Runs until the job queue is closed and empty. Returns the number of
    /// jobs this worker processed.
    pub async fn run(self) -> u64 {
        let mut processed = 0;

        loop {
            let job = {
                let mut rx = self.jobs_rx.lock().await;
                rx.recv().await
            };

            let Some(mut job) = job else {
                break;
            };

            self.use_case.execute(&mut job).await;

            if self.completed_tx.send(job).await.is_err() {
                warn!(worker_id = self.id, "Completed queue closed, stopping worker");
                break;
            }
            processed += 1;
        }

        debug!(worker_id = self.id, processed, "Worker finished");
        processed
    }
}
