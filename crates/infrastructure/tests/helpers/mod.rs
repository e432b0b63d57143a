pub mod resolvers;

pub use dns_server_mock::{build_mock_response, MockAnswer, MockDnsServer};
pub use http_server_mock::MockHttpServer;
pub use resolvers::StaticResolver;
