//! Ferrous Sweep Infrastructure Layer
//!
//! DNS over the wire with `hickory-proto`, and the HTTP header probe with
//! `reqwest`.
pub mod dns;
pub mod probe;
