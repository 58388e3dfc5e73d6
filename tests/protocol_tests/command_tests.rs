//! Tests for typed commands, endpoints and configuration
//!
//! These tests verify:
//! - Course state length and mode validation
//! - Grid to wire mapping (row order, inversion, ramp)
//! - Mode and setting parsing
//! - Endpoint table
//! - URL construction from Config

use puttlink::config::{Config, DEFAULT_BASE_ADDRESS};
use puttlink::protocol::{
    BallDispensingMode, CourseState, Endpoint, Method, Mode, PayloadShape, ResponseShape,
    Settings, COURSE_STATE_LEN, GRID_COLS, GRID_ROWS, MAX_POSITION,
};
use puttlink::DeviceError;

// =============================================================================
// Helper Functions
// =============================================================================

fn course_bytes(mode: u8) -> Vec<u8> {
    let mut bytes = vec![mode];
    bytes.extend((0..45).map(|i| i as u8));
    bytes
}

// =============================================================================
// Course State Tests
// =============================================================================

#[test]
fn test_course_state_from_bytes() {
    let bytes = course_bytes(1);
    let state = CourseState::from_bytes(&bytes).unwrap();

    assert_eq!(state.mode(), Mode::BallReturn);
    assert_eq!(state.positions()[0], 0);
    assert_eq!(state.positions()[44], 44);
    assert_eq!(state.to_bytes().to_vec(), bytes);
}

#[test]
fn test_course_state_rejects_wrong_length() {
    for len in [0, 1, 45, 47, 92] {
        let bytes = vec![0u8; len];
        let result = CourseState::from_bytes(&bytes);
        assert!(
            matches!(result, Err(DeviceError::InvalidPayload(_))),
            "length {} should be rejected",
            len
        );
    }
}

#[test]
fn test_course_state_rejects_unknown_mode() {
    let result = CourseState::from_bytes(&course_bytes(4));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("unknown mode byte"));
}

#[test]
fn test_course_state_groups() {
    let state = CourseState::from_bytes(&course_bytes(0)).unwrap();

    assert_eq!(state.group(0).unwrap(), &(0..15).collect::<Vec<u8>>()[..]);
    assert_eq!(state.group(1).unwrap()[0], 15);
    assert_eq!(state.group(2).unwrap()[14], 44);
    assert!(state.group(3).is_none());
}

#[test]
fn test_course_state_wire_length() {
    let state = CourseState::uniform(Mode::Tsunami, 0);
    let bytes = state.to_bytes();

    assert_eq!(bytes.len(), COURSE_STATE_LEN);
    assert_eq!(bytes[0], 3);
}

// =============================================================================
// Grid Mapping Tests
// =============================================================================

#[test]
fn test_grid_flat_course_is_all_max() {
    let grid = [[0u8; GRID_COLS]; GRID_ROWS];
    let state = CourseState::from_grid(Mode::Static, &grid, false).unwrap();

    assert!(state.positions().iter().all(|&p| p == MAX_POSITION));
}

#[test]
fn test_grid_rows_sent_bottom_first_and_inverted() {
    let mut grid = [[0u8; GRID_COLS]; GRID_ROWS];
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = (row * 10 + col) as u8;
        }
    }

    let state = CourseState::from_grid(Mode::Static, &grid, false).unwrap();
    let positions = state.positions();

    // Bottom row (row 8) comes first
    assert_eq!(positions[0], 90 - 80);
    assert_eq!(positions[4], 90 - 84);
    // Top row (row 0) comes last
    assert_eq!(positions[40], 90);
    assert_eq!(positions[44], 90 - 4);
}

#[test]
fn test_grid_ramp_scales_first_two_rows() {
    let grid = [[60u8; GRID_COLS]; GRID_ROWS];
    let state = CourseState::from_grid(Mode::Static, &grid, true).unwrap();
    let positions = state.positions();

    assert!(positions[0..5].iter().all(|&p| p == 90 - 20));
    assert!(positions[5..10].iter().all(|&p| p == 90 - 30));
    assert!(positions[10..].iter().all(|&p| p == 90 - 60));
}

#[test]
fn test_grid_rejects_position_above_max() {
    let mut grid = [[0u8; GRID_COLS]; GRID_ROWS];
    grid[2][3] = MAX_POSITION + 1;

    let result = CourseState::from_grid(Mode::Static, &grid, false);
    assert!(matches!(result, Err(DeviceError::InvalidPayload(_))));
    assert!(result.unwrap_err().to_string().contains("row 2 column 3"));
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_mode_parsing() {
    assert_eq!("static".parse::<Mode>().unwrap(), Mode::Static);
    assert_eq!("ball-return".parse::<Mode>().unwrap(), Mode::BallReturn);
    assert_eq!("WAVE".parse::<Mode>().unwrap(), Mode::Wave);
    assert_eq!("3".parse::<Mode>().unwrap(), Mode::Tsunami);
    assert!("7".parse::<Mode>().is_err());
    assert!("loop".parse::<Mode>().is_err());
}

#[test]
fn test_dispensing_mode_parsing() {
    assert_eq!(
        "manual".parse::<BallDispensingMode>().unwrap(),
        BallDispensingMode::Manual
    );
    assert_eq!(
        "auto".parse::<BallDispensingMode>().unwrap(),
        BallDispensingMode::Automatic
    );
    assert!(BallDispensingMode::try_from(2u8).is_err());
}

#[test]
fn test_settings_byte() {
    assert_eq!(Settings::default().to_byte(), 0);
    assert_eq!(Settings::new(BallDispensingMode::Automatic).to_byte(), 1);
}

// =============================================================================
// Endpoint Table Tests
// =============================================================================

#[test]
fn test_endpoint_table() {
    let expected = [
        (Endpoint::Echo, "/echo", Method::Post),
        (Endpoint::DebugMsg, "/debug_msg", Method::Get),
        (Endpoint::CourseState, "/course_state", Method::Post),
        (Endpoint::ResetStats, "/reset_stats", Method::Post),
        (Endpoint::ClearSequence, "/clear_sequence", Method::Post),
        (Endpoint::Settings, "/settings", Method::Post),
        (Endpoint::DispenseBall, "/dispense_ball", Method::Post),
        (Endpoint::ErrorCodes, "/error_codes", Method::Get),
        (Endpoint::Stats, "/stats", Method::Get),
    ];

    for (endpoint, path, method) in expected {
        assert_eq!(endpoint.default_path(), path);
        assert_eq!(endpoint.method(), method);
    }
}

#[test]
fn test_endpoint_paths_unique() {
    let mut paths: Vec<&str> = Endpoint::ALL.iter().map(|e| e.default_path()).collect();
    assert!(paths.iter().all(|p| p.starts_with('/')));

    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), Endpoint::ALL.len());
}

#[test]
fn test_endpoint_shapes() {
    assert_eq!(Endpoint::CourseState.payload_shape(), PayloadShape::Fixed(46));
    assert_eq!(Endpoint::Settings.payload_shape(), PayloadShape::Fixed(1));
    assert_eq!(Endpoint::Echo.payload_shape(), PayloadShape::Text);
    assert_eq!(Endpoint::Stats.payload_shape(), PayloadShape::None);

    assert_eq!(Endpoint::Stats.response_shape(), ResponseShape::Stats);
    assert_eq!(Endpoint::ErrorCodes.response_shape(), ResponseShape::Bytes);
    assert_eq!(Endpoint::DebugMsg.response_shape(), ResponseShape::Text);
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.base_address, DEFAULT_BASE_ADDRESS);
    assert_eq!(config.timeout_ms, 5000);
    assert!(!config.use_system_proxy);
    assert_eq!(config.url(Endpoint::Stats).unwrap(), "http://192.168.4.1/stats");
}

#[test]
fn test_config_base_url_normalization() {
    let cases = [
        ("10.0.0.31", "http://10.0.0.31"),
        ("http://10.0.0.190/", "http://10.0.0.190"),
        ("  192.168.4.1:8080 ", "http://192.168.4.1:8080"),
        ("HTTP://10.0.0.31", "http://10.0.0.31"),
        ("Http://10.0.0.31/", "http://10.0.0.31"),
    ];

    for (address, expected) in cases {
        let config = Config::builder().base_address(address).build();
        assert_eq!(config.base_url().unwrap(), expected);
    }
}

#[test]
fn test_config_rejects_bad_addresses() {
    let addresses = [
        "",
        "   ",
        "http://",
        "https://10.0.0.31",
        "HTTPS://10.0.0.31",
        "ftp://10.0.0.31",
        "10.0.0 .31",
    ];
    for address in addresses {
        let config = Config::builder().base_address(address).build();
        assert!(
            matches!(config.validate(), Err(DeviceError::Config(_))),
            "{:?} should be rejected",
            address
        );
    }
}

#[test]
fn test_config_endpoint_override() {
    let config = Config::builder()
        .base_address("10.0.0.31")
        .endpoint_path(Endpoint::Stats, "api/stats")
        .endpoint_path(Endpoint::Echo, "/v2/echo")
        .build();

    assert_eq!(config.url(Endpoint::Stats).unwrap(), "http://10.0.0.31/api/stats");
    assert_eq!(config.url(Endpoint::Echo).unwrap(), "http://10.0.0.31/v2/echo");
    assert_eq!(config.url(Endpoint::DebugMsg).unwrap(), "http://10.0.0.31/debug_msg");
}

#[test]
fn test_config_system_proxy_opt_in() {
    assert!(Config::builder().use_system_proxy(true).build().use_system_proxy);
    assert!(!Config::builder().build().use_system_proxy);
}

#[test]
fn test_config_timeout() {
    assert!(Config::builder().timeout_ms(0).build().timeout().is_none());
    assert_eq!(
        Config::builder().timeout_ms(250).build().timeout(),
        Some(std::time::Duration::from_millis(250))
    );
}
