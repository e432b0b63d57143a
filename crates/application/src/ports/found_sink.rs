use ferrous_sweep_domain::Job;

/// Receives every matched job, synchronously, on the aggregator task.
///
/// Runs on the aggregator's critical path, so implementations should
/// return quickly.
pub trait FoundSink: Send {
    fn on_found(&mut self, job: &Job);
}

impl<F> FoundSink for F
where
    F: FnMut(&Job) + Send,
{
    fn on_found(&mut self, job: &Job) {
        self(job)
    }
}
