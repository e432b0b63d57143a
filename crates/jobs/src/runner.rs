use crate::{Aggregator, DomainSource, ProbeWorker};
use ferrous_sweep_application::ports::FoundSink;
use ferrous_sweep_application::use_cases::ProbeHostUseCase;
use ferrous_sweep_domain::{Progress, RunStats};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::AsyncBufRead;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinError;
use tracing::{error, info};

const DEFAULT_WORKERS: usize = 250;
const DEFAULT_QUEUE_CAPACITY: usize = 1000;

/// Wires the domain source, the worker pool and the aggregator together.
///
/// Use the builder methods to size the pipeline, then call `.run()` once.
///
/// # Example
///
/// ```rust,ignore
/// let stats = SweepRunner::new(use_case)
///     .with_workers(250)
///     .with_queue_capacity(1000)
///     .with_found_sink(|job: &Job| println!("{job}"))
///     .run(BufReader::new(file))
///     .await?;
/// ```
pub struct SweepRunner {
    use_case: Arc<ProbeHostUseCase>,
    workers: usize,
    queue_capacity: usize,
    sink: Option<Box<dyn FoundSink>>,
    progress_tx: watch::Sender<Progress>,
}

impl SweepRunner {
    pub fn new(use_case: Arc<ProbeHostUseCase>) -> Self {
        let (progress_tx, _) = watch::channel(Progress::default());
        Self {
            use_case,
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            sink: None,
            progress_tx,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Capacity of both the job queue and the completed queue.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    pub fn with_found_sink(mut self, sink: impl FoundSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Live counters, updated by the aggregator after every job.
    pub fn progress(&self) -> watch::Receiver<Progress> {
        self.progress_tx.subscribe()
    }

    /// Runs the whole sweep over `input` and returns the final stats.
    ///
    /// Shutdown order: the job queue closes when the source is exhausted,
    /// the completed queue closes once every worker has exited, and the
    /// aggregator returns after draining it.
    pub async fn run<R>(self, input: R) -> Result<RunStats, JoinError>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        info!(
            workers = self.workers,
            queue_capacity = self.queue_capacity,
            "Sweep started"
        );

        let stats = RunStats::new(Instant::now());
        let (jobs_tx, jobs_rx) = mpsc::channel(self.queue_capacity);
        let (completed_tx, completed_rx) = mpsc::channel(self.queue_capacity);

        let source = tokio::spawn(DomainSource::new(input).run(jobs_tx));

        let aggregator = tokio::spawn(
            Aggregator::new(stats, self.sink, self.progress_tx).run(completed_rx),
        );

        let jobs_rx = Arc::new(Mutex::new(jobs_rx));
        let workers: Vec<_> = (0..self.workers)
            .map(|id| {
                let worker = ProbeWorker::new(
                    id,
                    Arc::clone(&self.use_case),
                    Arc::clone(&jobs_rx),
                    completed_tx.clone(),
                );
                tokio::spawn(worker.run())
            })
            .collect();
        drop(jobs_rx);

        for result in join_all(workers).await {
            if let Err(e) = result {
                error!(error = %e, "Worker task failed");
            }
        }

        // Every worker is gone, nothing else can write to the completed queue
        drop(completed_tx);

        match source.await {
            Ok(produced) => info!(produced, "Hostname input fully queued"),
            Err(e) => error!(error = %e, "Domain source task failed"),
        }

        let stats = aggregator.await?;

        info!(
            completed = stats.completed,
            failed = stats.failed,
            found = stats.matched_count(),
            frequency = %stats.frequency(),
            "Sweep finished"
        );

        Ok(stats)
    }
}
