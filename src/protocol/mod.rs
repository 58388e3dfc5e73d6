//! Protocol Module
//!
//! Defines the HTTP byte protocol spoken by the course controller.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────┬────────┬──────────────────────┬──────────────┐
//! │ Path            │ Method │ Request body         │ Response     │
//! ├─────────────────┼────────┼──────────────────────┼──────────────┤
//! │ /echo           │ POST   │ text                 │ same text    │
//! │ /debug_msg      │ GET    │ -                    │ text         │
//! │ /course_state   │ POST   │ mode + 3 x 15 bytes  │ status text  │
//! │ /reset_stats    │ POST   │ -                    │ status text  │
//! │ /clear_sequence │ POST   │ -                    │ status text  │
//! │ /settings       │ POST   │ 1 byte               │ status text  │
//! │ /dispense_ball  │ POST   │ 1 byte               │ status text  │
//! │ /error_codes    │ GET    │ -                    │ byte vector  │
//! │ /stats          │ GET    │ -                    │ 2 bytes      │
//! └─────────────────┴────────┴──────────────────────┴──────────────┘
//! ```
//!
//! Byte payloads are raw bytes on the wire, never re-encoded as text.

mod command;
mod response;
mod endpoint;
mod codec;

pub use command::{BallDispensingMode, Command, CourseState, Mode, Settings};
pub use response::{ErrorCode, ErrorCodes, Response, StatsRecord};
pub use endpoint::{Endpoint, Method, PayloadShape, ResponseShape};
pub use codec::{
    decode_error_codes, decode_payload, decode_stats, decode_text, encode_command,
    encode_payload, Request,
};

/// Actuator grid rows
pub const GRID_ROWS: usize = 9;

/// Actuator grid columns
pub const GRID_COLS: usize = 5;

/// Actuators on the course
pub const NUM_ACTUATORS: usize = GRID_ROWS * GRID_COLS;

/// Position groups in a course state
pub const POSITION_GROUPS: usize = 3;

/// Positions per group
pub const GROUP_LEN: usize = NUM_ACTUATORS / POSITION_GROUPS;

/// Course state wire length: mode byte + 3 x 15 positions
pub const COURSE_STATE_LEN: usize = 1 + NUM_ACTUATORS;

/// Highest actuator position
pub const MAX_POSITION: u8 = 90;

/// Most balls a single dispense command may ask for
pub const MAX_DISPENSE_COUNT: u8 = 10;

/// Stats record wire length
pub const STATS_LEN: usize = 2;
