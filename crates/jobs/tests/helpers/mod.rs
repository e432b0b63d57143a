#![allow(unused_imports)]


pub use mock_probes::{MockHeaderProbe, ResolvingHeaderProbe, StubResolver};
pub use readers::{hostnames, FailAfter};
