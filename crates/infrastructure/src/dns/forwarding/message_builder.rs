//! DNS Message Builder
//!
//! Constructs A-record query messages in wire format using `hickory-proto`.

use ferrous_sweep_domain::ProbeError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::borrow::Cow;
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an A query and return its message ID together with the bytes.
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question for the fully-qualified hostname
    pub fn build_a_query(hostname: &str) -> Result<(u16, Vec<u8>), ProbeError> {
        let name = Self::fqdn(hostname)?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::A);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message, hostname)?;
        Ok((id, bytes))
    }

    /// Parses `hostname` as an absolute name, appending the root label
    /// when it is missing.
    fn fqdn(hostname: &str) -> Result<Name, ProbeError> {
        if hostname.is_empty() {
            return Err(ProbeError::InvalidHostname("empty hostname".to_string()));
        }

        let absolute: Cow<'_, str> = if hostname.ends_with('.') {
            Cow::Borrowed(hostname)
        } else {
            Cow::Owned(format!("{hostname}."))
        };

        Name::from_str(&absolute)
            .map_err(|e| ProbeError::InvalidHostname(format!("'{}': {}", hostname, e)))
    }

    fn serialize_message(message: &Message, hostname: &str) -> Result<Vec<u8>, ProbeError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            ProbeError::InvalidHostname(format!("'{}' cannot be encoded: {}", hostname, e))
        })?;

        Ok(buf)
    }
}
