use ferrous_sweep_domain::ProbeError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::{Ipv4Addr, SocketAddr};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    /// A records in answer order
    pub addresses: Vec<Ipv4Addr>,
}

impl DnsResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }

    pub fn status(&self) -> String {
        ResponseParser::rcode_to_status(self.rcode)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a wire-format reply from `server`, keeping only A records.
    pub fn parse(response_bytes: &[u8], server: SocketAddr) -> Result<DnsResponse, ProbeError> {
        let message =
            Message::from_vec(response_bytes).map_err(|e| ProbeError::MalformedResponse {
                server: server.to_string(),
                reason: e.to_string(),
            })?;

        let rcode = message.response_code();

        let mut addresses = Vec::with_capacity(message.answers().len().min(8));
        for record in message.answers() {
            if let RData::A(a) = record.data() {
                addresses.push(a.0);
            }
        }

        debug!(
            server = %server,
            rcode = ?rcode,
            addresses = addresses.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            addresses,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> String {
        match rcode {
            ResponseCode::NoError => "NOERROR".to_string(),
            ResponseCode::NXDomain => "NXDOMAIN".to_string(),
            ResponseCode::ServFail => "SERVFAIL".to_string(),
            ResponseCode::Refused => "REFUSED".to_string(),
            ResponseCode::NotImp => "NOTIMP".to_string(),
            ResponseCode::FormErr => "FORMERR".to_string(),
            other => format!("RCODE{}", u16::from(other)),
        }
    }
}
