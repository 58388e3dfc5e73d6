//! Response definitions
//!
//! Represents what the device sends back.

use std::fmt;

use bytes::Bytes;
use serde::Serialize;

/// A raw HTTP reply from the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,

    /// Body exactly as received
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, invalid UTF-8 replaced
    pub fn text(&self) -> String {
        super::decode_text(&self.body)
    }

    /// Body as unsigned byte values
    pub fn bytes(&self) -> Vec<u8> {
        super::decode_payload(&self.body)
    }
}

/// Hit and hole counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsRecord {
    pub balls_hit: u8,
    pub balls_in_hole: u8,
}

impl StatsRecord {
    /// A ball can only drop after it was hit
    pub fn is_consistent(&self) -> bool {
        self.balls_in_hole <= self.balls_hit
    }
}

impl fmt::Display for StatsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "balls hit: {}, balls in hole: {}", self.balls_hit, self.balls_in_hole)
    }
}

/// Error codes the firmware knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ErrorCode {
    BallMath = 0,
    BallInHoleFeed = 1,
    PlayerBallReturn = 2,
    Nvs = 3,
}

impl ErrorCode {
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(ErrorCode::BallMath),
            1 => Some(ErrorCode::BallInHoleFeed),
            2 => Some(ErrorCode::PlayerBallReturn),
            3 => Some(ErrorCode::Nvs),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::BallMath => "ball estimation math error",
            ErrorCode::BallInHoleFeed => "ball-in-hole feed error",
            ErrorCode::PlayerBallReturn => "player ball return error",
            ErrorCode::Nvs => "non-volatile storage error",
        }
    }
}

/// Pending error codes, in the order the device reported them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorCodes(pub Vec<u8>);

impl ErrorCodes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn raw(&self) -> &[u8] {
        &self.0
    }

    /// Codes this crate can name; unknown ones are skipped
    pub fn known(&self) -> impl Iterator<Item = ErrorCode> + '_ {
        self.0.iter().filter_map(|&code| ErrorCode::from_u8(code))
    }

    /// Codes this crate cannot name
    pub fn unknown(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied().filter(|&code| ErrorCode::from_u8(code).is_none())
    }
}
