//! Ferrous Sweep Application Layer
//!
//! Ports the pipeline depends on and the per-hostname use case.
pub mod ports;
pub mod use_cases;
