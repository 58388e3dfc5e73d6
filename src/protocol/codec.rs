//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! Byte-vector bodies carry one value per byte, position for position:
//! ```text
//! ┌────────┬────────┬────────┬─────┐
//! │ v0 (1) │ v1 (1) │ v2 (1) │ ... │
//! └────────┴────────┴────────┴─────┘
//! ```
//!
//! ### Request bodies by endpoint
//! - /echo:           UTF-8 text
//! - /course_state:   mode (1) + 45 positions
//! - /settings:       dispensing mode (1)
//! - /dispense_ball:  ball count (1)
//! - everything else: empty
//!
//! ### Response bodies
//! - /stats:       balls_hit (1) + balls_in_hole (1)
//! - /error_codes: one code per byte
//! - everything else: text

use bytes::{BufMut, Bytes, BytesMut};

use super::command::check_dispense_count;
use super::{Command, Endpoint, ErrorCodes, Method, PayloadShape, StatsRecord, STATS_LEN};
use crate::error::{DeviceError, Result};

/// An encoded request, ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub endpoint: Endpoint,
    pub method: Method,
    /// `None` for bodiless requests
    pub body: Option<Bytes>,
}

impl Request {
    /// Content-Type matching the endpoint's payload
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref()?;
        match self.endpoint.payload_shape() {
            PayloadShape::Text => Some("text/plain"),
            PayloadShape::Fixed(_) => Some("application/octet-stream"),
            PayloadShape::None => None,
        }
    }
}

// =============================================================================
// Payload Encoding/Decoding
// =============================================================================

/// Encode byte values into a request body
pub fn encode_payload(values: &[u8]) -> Bytes {
    let mut body = BytesMut::with_capacity(values.len());
    body.put_slice(values);
    body.freeze()
}

/// Decode a response body into byte values
///
/// An empty body is an empty sequence.
pub fn decode_payload(body: &[u8]) -> Vec<u8> {
    body.to_vec()
}

/// Decode a text body, replacing invalid UTF-8
pub fn decode_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command into a request
///
/// Fixed-length payloads are checked against the endpoint before anything
/// is handed to a transport.
pub fn encode_command(command: &Command) -> Result<Request> {
    let endpoint = command.endpoint();

    let body = match command {
        Command::Echo { text } => Some(Bytes::copy_from_slice(text.as_bytes())),
        Command::CourseState(state) => Some(encode_payload(&state.to_bytes())),
        Command::Settings(settings) => Some(encode_payload(&[settings.to_byte()])),
        Command::DispenseBall { count } => {
            check_dispense_count(*count)?;
            Some(encode_payload(&[*count]))
        }
        Command::ResetStats
        | Command::ClearSequence
        | Command::DebugMsg
        | Command::ErrorCodes
        | Command::Stats
        | Command::Ping => None,
    };

    if let (PayloadShape::Fixed(expected), Some(body)) = (endpoint.payload_shape(), &body) {
        if body.len() != expected {
            return Err(DeviceError::InvalidPayload(format!(
                "{} expects {} bytes, got {}",
                endpoint.default_path(),
                expected,
                body.len()
            )));
        }
    }

    Ok(Request {
        endpoint,
        method: endpoint.method(),
        body,
    })
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode a stats body
///
/// The first two bytes are read; trailing bytes are ignored.
pub fn decode_stats(body: &[u8]) -> Result<StatsRecord> {
    if body.len() < STATS_LEN {
        return Err(DeviceError::Decode(format!(
            "Incomplete stats record: expected {} bytes, got {}",
            STATS_LEN,
            body.len()
        )));
    }

    Ok(StatsRecord {
        balls_hit: body[0],
        balls_in_hole: body[1],
    })
}

/// Decode an error code body
pub fn decode_error_codes(body: &[u8]) -> ErrorCodes {
    ErrorCodes(decode_payload(body))
}
