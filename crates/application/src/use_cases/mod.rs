pub mod probe_host;

pub use probe_host::ProbeHostUseCase;
