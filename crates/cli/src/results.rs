use ferrous_sweep_application::ports::FoundSink;
use ferrous_sweep_domain::Job;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{error, info};

/// Appends one line per matched job to the results file.
///
/// Buffered; the buffer is flushed when the writer is dropped, which happens
/// as soon as the aggregator has drained the completed queue.
pub struct ResultsWriter {
    path: String,
    writer: BufWriter<File>,
    written: u64,
}

impl ResultsWriter {
    /// Creates (or truncates) the results file.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Ok(Self {
            path: path.display().to_string(),
            writer: BufWriter::new(file),
            written: 0,
        })
    }
}

impl FoundSink for ResultsWriter {
    fn on_found(&mut self, job: &Job) {
        match writeln!(self.writer, "{job}") {
            Ok(()) => self.written += 1,
            Err(e) => error!(path = %self.path, job = %job, error = %e, "Failed to write result"),
        }
    }
}

impl Drop for ResultsWriter {
    fn drop(&mut self) {
        match self.writer.flush() {
            Ok(()) => info!(path = %self.path, written = self.written, "Results file flushed"),
            Err(e) => error!(path = %self.path, error = %e, "Failed to flush results file"),
        }
    }
}
