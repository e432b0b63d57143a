use ferrous_sweep_domain::Job;
use std::borrow::Cow;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

/// Streams hostnames from a line-oriented reader into the job queue.
///
/// Only one line is held at a time; a full queue suspends the source,
/// which is what bounds memory for arbitrarily large inputs.
pub struct DomainSource<R> {
    reader: R,
}

impl<R> DomainSource<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Produces one job per non-empty line, IDs `0..K-1` in read order.
    ///
    /// Returns the number of jobs produced. The queue is closed when this
    /// returns, either at end of input or after a read error.
    ///
    /// Lines are read as raw bytes; invalid UTF-8 is replaced rather than
    /// treated as a read error, so only real I/O failures stop production.
    pub async fn run(mut self, jobs_tx: mpsc::Sender<Job>) -> u64 {
        let mut buf = Vec::with_capacity(256);
        let mut next_id: u64 = 0;

        loop {
            buf.clear();
            match self.reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, produced = next_id, "Failed to read hostnames input");
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                warn!(id = next_id, line = %line.trim(), "Hostname line is not valid UTF-8");
            }

            let hostname = line.trim();
            if hostname.is_empty() {
                continue;
            }

            if jobs_tx.send(Job::new(next_id, hostname)).await.is_err() {
                error!(produced = next_id, "Job queue closed before input was exhausted");
                break;
            }
            next_id += 1;
        }

        debug!(produced = next_id, "Hostname input exhausted");
        next_id
    }
}
