use crate::Job;
use std::time::{Duration, Instant};

/// Point-in-time copy of the run counters, published by the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed: u64,
    pub failed: u64,
    pub matched: u64,
}

/// Run-wide counters and matched jobs.
///
/// Only the aggregator task mutates this while a run is active; everyone
/// else receives it by value once the run is over.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub completed: u64,
    pub failed: u64,
    pub matched: Vec<Job>,
    pub started_at: Instant,
    pub finished_at: Option<Instant>,
}

impl RunStats {
    pub fn new(started_at: Instant) -> Self {
        Self {
            completed: 0,
            failed: 0,
            matched: Vec::new(),
            started_at,
            finished_at: None,
        }
    }

    /// Counts one processed job and keeps it when it is a match, returning
    /// the stored job in that case.
    pub fn record(&mut self, job: Job) -> Option<&Job> {
        self.completed += 1;
        if job.is_failed() {
            self.failed += 1;
        }
        if !job.is_matched() {
            return None;
        }
        self.matched.push(job);
        self.matched.last()
    }

    pub fn finish(&mut self) {
        self.finished_at.get_or_insert_with(Instant::now);
    }

    pub fn matched_count(&self) -> u64 {
        self.matched.len() as u64
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.completed,
            failed: self.failed,
            matched: self.matched_count(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.finished_at
            .unwrap_or_else(Instant::now)
            .saturating_duration_since(self.started_at)
    }

    /// Completed jobs per second over the whole run.
    pub fn throughput(&self) -> f64 {
        throughput(self.completed, self.elapsed())
    }

    /// Throughput formatted the way progress reports print it.
    pub fn frequency(&self) -> String {
        format!("{:.2} req/s", self.throughput())
    }
}

/// `completed / max(elapsed_seconds, 1)`.
pub fn throughput(completed: u64, elapsed: Duration) -> f64 {
    completed as f64 / elapsed.as_secs_f64().max(1.0)
}
