//! Endpoint definitions
//!
//! The device capabilities, one per HTTP path.

use std::fmt;

/// HTTP methods used by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a request body carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// No body
    None,

    /// Free UTF-8 text
    Text,

    /// Byte vector of exactly this many bytes
    Fixed(usize),
}

/// What a response body carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Human-readable status or log text
    Text,

    /// Raw byte vector of any length
    Bytes,

    /// Two-byte stats record
    Stats,
}

/// Device endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Echo,
    DebugMsg,
    CourseState,
    ResetStats,
    ClearSequence,
    Settings,
    DispenseBall,
    ErrorCodes,
    Stats,
    /// Reachability probe; any HTTP answer counts as reachable
    Ping,
}

impl Endpoint {
    /// Every endpoint, in table order
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Echo,
        Endpoint::DebugMsg,
        Endpoint::CourseState,
        Endpoint::ResetStats,
        Endpoint::ClearSequence,
        Endpoint::Settings,
        Endpoint::DispenseBall,
        Endpoint::ErrorCodes,
        Endpoint::Stats,
        Endpoint::Ping,
    ];

    /// Path registered by the firmware
    pub fn default_path(&self) -> &'static str {
        match self {
            Endpoint::Echo => "/echo",
            Endpoint::DebugMsg => "/debug_msg",
            Endpoint::CourseState => "/course_state",
            Endpoint::ResetStats => "/reset_stats",
            Endpoint::ClearSequence => "/clear_sequence",
            Endpoint::Settings => "/settings",
            Endpoint::DispenseBall => "/dispense_ball",
            Endpoint::ErrorCodes => "/error_codes",
            Endpoint::Stats => "/stats",
            Endpoint::Ping => "/ping",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::DebugMsg | Endpoint::ErrorCodes | Endpoint::Stats | Endpoint::Ping => {
                Method::Get
            }
            Endpoint::Echo
            | Endpoint::CourseState
            | Endpoint::ResetStats
            | Endpoint::ClearSequence
            | Endpoint::Settings
            | Endpoint::DispenseBall => Method::Post,
        }
    }

    pub fn payload_shape(&self) -> PayloadShape {
        match self {
            Endpoint::Echo => PayloadShape::Text,
            Endpoint::CourseState => PayloadShape::Fixed(super::COURSE_STATE_LEN),
            Endpoint::Settings | Endpoint::DispenseBall => PayloadShape::Fixed(1),
            _ => PayloadShape::None,
        }
    }

    pub fn response_shape(&self) -> ResponseShape {
        match self {
            Endpoint::ErrorCodes => ResponseShape::Bytes,
            Endpoint::Stats => ResponseShape::Stats,
            _ => ResponseShape::Text,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.default_path())
    }
}
