//! Device client
//!
//! One method per device endpoint. Every call is a single blocking attempt.

use crate::config::Config;
use crate::error::{DeviceError, Result};
use crate::network::{HttpTransport, Transport};
use crate::protocol::{
    decode_error_codes, decode_stats, encode_command, Command, CourseState, ErrorCodes,
    Response, Settings, StatsRecord,
};

/// Client for a single course controller
pub struct DeviceClient<T: Transport = HttpTransport> {
    /// Base address, endpoint paths and timeout
    config: Config,

    /// Carries requests to the device
    transport: T,
}

impl DeviceClient<HttpTransport> {
    /// Create a client that talks HTTP to the configured device
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> DeviceClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(config: Config, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode and send any command, returning the raw reply
    ///
    /// Non-success statuses are returned, not raised.
    pub fn execute(&self, command: &Command) -> Result<Response> {
        let request = encode_command(command)?;
        let url = self.config.url(request.endpoint)?;
        let body_len = request.body.as_ref().map_or(0, |b| b.len());

        tracing::debug!("{} {} ({} byte body)", request.method, url, body_len);
        if let Some(body) = &request.body {
            tracing::trace!("payload: {:?}", body.as_ref());
        }

        let response = match self.transport.send(&url, &request) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{} {} failed: {}", request.method, url, e);
                return Err(e);
            }
        };

        tracing::debug!("{} {} -> {} ({} bytes)", request.method, url, response.status, response.body.len());
        if !response.is_success() {
            tracing::warn!("{} answered HTTP {}: {}", url, response.status, response.text());
        }

        Ok(response)
    }

    // =========================================================================
    // Text endpoints
    // =========================================================================

    /// POST /echo
    pub fn echo(&self, text: &str) -> Result<Response> {
        self.execute(&Command::Echo {
            text: text.to_string(),
        })
    }

    /// GET /debug_msg
    pub fn debug_msg(&self) -> Result<Response> {
        self.execute(&Command::DebugMsg)
    }

    /// POST /course_state
    pub fn course_state(&self, state: &CourseState) -> Result<Response> {
        self.execute(&Command::CourseState(state.clone()))
    }

    /// POST /course_state from raw bytes
    ///
    /// Anything but a 46-byte vector with a known mode is rejected without
    /// touching the transport.
    pub fn course_state_raw(&self, bytes: &[u8]) -> Result<Response> {
        let state = CourseState::from_bytes(bytes)?;
        self.course_state(&state)
    }

    /// POST /reset_stats
    pub fn reset_stats(&self) -> Result<Response> {
        self.execute(&Command::ResetStats)
    }

    /// POST /clear_sequence
    pub fn clear_sequence(&self) -> Result<Response> {
        self.execute(&Command::ClearSequence)
    }

    /// POST /settings
    pub fn settings(&self, settings: Settings) -> Result<Response> {
        self.execute(&Command::Settings(settings))
    }

    /// POST /dispense_ball
    pub fn dispense_ball(&self, count: u8) -> Result<Response> {
        self.execute(&Command::dispense_ball(count)?)
    }

    // =========================================================================
    // Decoded endpoints
    // =========================================================================

    /// GET /error_codes
    pub fn error_codes(&self) -> Result<ErrorCodes> {
        let response = success(self.execute(&Command::ErrorCodes)?)?;
        Ok(decode_error_codes(&response.body))
    }

    /// GET /stats
    pub fn stats(&self) -> Result<StatsRecord> {
        let response = success(self.execute(&Command::Stats)?)?;
        let stats = decode_stats(&response.body)?;
        if !stats.is_consistent() {
            tracing::warn!("device reported more balls in hole than hit: {}", stats);
        }
        Ok(stats)
    }

    /// GET /ping
    ///
    /// Any HTTP answer means the device is reachable; its status is returned.
    pub fn ping(&self) -> Result<u16> {
        self.execute(&Command::Ping).map(|response| response.status)
    }
}

/// Decoded endpoints have no record to decode from an error page
fn success(response: Response) -> Result<Response> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(DeviceError::Status {
            status: response.status,
            body: response.text(),
        })
    }
}
