pub mod dns_resolver;
pub mod found_sink;
pub mod header_probe;

pub use dns_resolver::DnsResolver;
pub use found_sink::FoundSink;
pub use header_probe::HeaderProbe;
