//! Command definitions
//!
//! Typed requests and the fixed-layout payloads they carry.

use std::fmt;
use std::str::FromStr;

use super::{
    Endpoint, COURSE_STATE_LEN, GRID_COLS, GRID_ROWS, GROUP_LEN, MAX_DISPENSE_COUNT,
    MAX_POSITION, NUM_ACTUATORS, POSITION_GROUPS,
};
use crate::error::{DeviceError, Result};

/// Course actuator modes (first byte of a course state)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Static = 0,
    BallReturn = 1,
    Wave = 2,
    Tsunami = 3,
}

impl TryFrom<u8> for Mode {
    type Error = DeviceError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Mode::Static),
            1 => Ok(Mode::BallReturn),
            2 => Ok(Mode::Wave),
            3 => Ok(Mode::Tsunami),
            _ => Err(DeviceError::InvalidPayload(format!("unknown mode byte: {}", value))),
        }
    }
}

impl FromStr for Mode {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(Mode::Static),
            "ball-return" | "ball_return" | "return" => Ok(Mode::BallReturn),
            "wave" => Ok(Mode::Wave),
            "tsunami" => Ok(Mode::Tsunami),
            other => other
                .parse::<u8>()
                .map_err(|_| DeviceError::InvalidPayload(format!("unknown mode: {}", s)))
                .and_then(Mode::try_from),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Static => "static",
            Mode::BallReturn => "ball-return",
            Mode::Wave => "wave",
            Mode::Tsunami => "tsunami",
        };
        f.write_str(name)
    }
}

/// Target state for every actuator on the course
///
/// Wire layout: `mode (1) | group 0 (15) | group 1 (15) | group 2 (15)`.
/// Position bytes are sent as-is; use [`CourseState::from_grid`] to build
/// them from actuator heights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseState {
    mode: Mode,
    positions: [u8; NUM_ACTUATORS],
}

impl CourseState {
    /// Create a course state from wire-ready position bytes
    pub fn new(mode: Mode, positions: [u8; NUM_ACTUATORS]) -> Self {
        Self { mode, positions }
    }

    /// Every actuator gets the same wire byte
    pub fn uniform(mode: Mode, value: u8) -> Self {
        Self::new(mode, [value; NUM_ACTUATORS])
    }

    /// Parse a raw 46-byte vector
    ///
    /// Any other length is rejected so nothing malformed reaches the device.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != COURSE_STATE_LEN {
            return Err(DeviceError::InvalidPayload(format!(
                "course state must be {} bytes, got {}",
                COURSE_STATE_LEN,
                bytes.len()
            )));
        }

        let mode = Mode::try_from(bytes[0])?;
        let mut positions = [0u8; NUM_ACTUATORS];
        positions.copy_from_slice(&bytes[1..]);

        Ok(Self { mode, positions })
    }

    /// Build a course state from actuator heights laid out as on the course
    ///
    /// Heights run from 0 (flat) to [`MAX_POSITION`]. Rows are sent bottom
    /// row first and each height `h` goes on the wire as `MAX_POSITION - h`.
    /// With `ramp` set, the first two rows sent are scaled to a third and a
    /// half of their height.
    pub fn from_grid(mode: Mode, grid: &[[u8; GRID_COLS]; GRID_ROWS], ramp: bool) -> Result<Self> {
        let mut positions = [0u8; NUM_ACTUATORS];

        for (out_row, row) in grid.iter().rev().enumerate() {
            let divisor = match (ramp, out_row) {
                (true, 0) => 3,
                (true, 1) => 2,
                _ => 1,
            };

            for (col, &height) in row.iter().enumerate() {
                if height > MAX_POSITION {
                    return Err(DeviceError::InvalidPayload(format!(
                        "position {} at row {} column {} exceeds {}",
                        height,
                        GRID_ROWS - 1 - out_row,
                        col,
                        MAX_POSITION
                    )));
                }
                positions[out_row * GRID_COLS + col] = MAX_POSITION - height / divisor;
            }
        }

        Ok(Self { mode, positions })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn positions(&self) -> &[u8; NUM_ACTUATORS] {
        &self.positions
    }

    /// One of the three 15-byte position groups
    pub fn group(&self, index: usize) -> Option<&[u8]> {
        if index >= POSITION_GROUPS {
            return None;
        }
        Some(&self.positions[index * GROUP_LEN..(index + 1) * GROUP_LEN])
    }

    /// Wire bytes, mode first
    pub fn to_bytes(&self) -> [u8; COURSE_STATE_LEN] {
        let mut bytes = [0u8; COURSE_STATE_LEN];
        bytes[0] = self.mode as u8;
        bytes[1..].copy_from_slice(&self.positions);
        bytes
    }
}

/// How the course hands out balls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BallDispensingMode {
    Manual = 0,
    Automatic = 1,
}

impl TryFrom<u8> for BallDispensingMode {
    type Error = DeviceError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(BallDispensingMode::Manual),
            1 => Ok(BallDispensingMode::Automatic),
            _ => Err(DeviceError::InvalidPayload(format!(
                "unknown dispensing mode byte: {}",
                value
            ))),
        }
    }
}

impl FromStr for BallDispensingMode {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "manual" | "0" => Ok(BallDispensingMode::Manual),
            "automatic" | "auto" | "1" => Ok(BallDispensingMode::Automatic),
            _ => Err(DeviceError::InvalidPayload(format!("unknown dispensing mode: {}", s))),
        }
    }
}

/// Device settings, sent as a single byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub dispensing: BallDispensingMode,
}

impl Settings {
    pub fn new(dispensing: BallDispensingMode) -> Self {
        Self { dispensing }
    }

    pub fn to_byte(self) -> u8 {
        self.dispensing as u8
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(BallDispensingMode::Manual)
    }
}

/// A typed request to the device
#[derive(Debug, Clone)]
pub enum Command {
    /// Echo text back (connectivity check)
    Echo { text: String },

    /// Fetch the device debug log
    DebugMsg,

    /// Push a new course target state
    CourseState(CourseState),

    /// Reset hit/hole counters
    ResetStats,

    /// Drop any queued motion sequence
    ClearSequence,

    /// Update device settings
    Settings(Settings),

    /// Dispense `count` balls (0..=10)
    DispenseBall { count: u8 },

    /// List pending error codes
    ErrorCodes,

    /// Read hit/hole counters
    Stats,

    /// Reachability probe
    Ping,
}

impl Command {
    /// Dispense command with the count checked up front
    pub fn dispense_ball(count: u8) -> Result<Self> {
        check_dispense_count(count)?;
        Ok(Command::DispenseBall { count })
    }

    /// Endpoint this command is sent to
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Command::Echo { .. } => Endpoint::Echo,
            Command::DebugMsg => Endpoint::DebugMsg,
            Command::CourseState(_) => Endpoint::CourseState,
            Command::ResetStats => Endpoint::ResetStats,
            Command::ClearSequence => Endpoint::ClearSequence,
            Command::Settings(_) => Endpoint::Settings,
            Command::DispenseBall { .. } => Endpoint::DispenseBall,
            Command::ErrorCodes => Endpoint::ErrorCodes,
            Command::Stats => Endpoint::Stats,
            Command::Ping => Endpoint::Ping,
        }
    }
}

pub(crate) fn check_dispense_count(count: u8) -> Result<()> {
    if count > MAX_DISPENSE_COUNT {
        return Err(DeviceError::InvalidPayload(format!(
            "can dispense at most {} balls, asked for {}",
            MAX_DISPENSE_COUNT, count
        )));
    }
    Ok(())
}
