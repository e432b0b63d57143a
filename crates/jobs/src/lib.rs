pub mod aggregator;
pub mod runner;
pub mod source;
pub mod worker;

pub use aggregator::Aggregator;
pub use runner::SweepRunner;
pub use source::DomainSource;
pub use worker::ProbeWorker;
