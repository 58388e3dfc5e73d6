//! Response printer
//!
//! Human-readable and JSON renderings of device replies.

use serde::Serialize;

use crate::error::Result;
use crate::protocol::{ErrorCodes, Response, StatsRecord};

/// Comma-separated byte values, e.g. `7,3`
pub fn format_bytes(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Status line plus body text
pub fn format_response(label: &str, response: &Response) -> String {
    format!(
        "{} response:\nStatus Code: {}\nResponse Body: {}",
        label,
        response.status,
        response.text()
    )
}

pub fn format_stats(stats: &StatsRecord) -> String {
    format!("Stats: {} ({})", format_bytes(&[stats.balls_hit, stats.balls_in_hole]), stats)
}

pub fn format_error_codes(codes: &ErrorCodes) -> String {
    if codes.is_empty() {
        return "Error codes: none".to_string();
    }

    let mut out = format!("Error codes: {}", format_bytes(codes.raw()));
    for code in codes.known() {
        out.push_str(&format!("\n  {} ({})", code as u8, code.description()));
    }
    for code in codes.unknown() {
        out.push_str(&format!("\n  {} (unknown)", code));
    }
    out
}

#[derive(Serialize)]
struct JsonResponse<'a> {
    status: u16,
    success: bool,
    body: &'a str,
}

/// JSON rendering of a raw reply
pub fn response_json(response: &Response) -> Result<String> {
    let text = response.text();
    let json = JsonResponse {
        status: response.status,
        success: response.is_success(),
        body: &text,
    };
    Ok(serde_json::to_string(&json)?)
}

/// JSON rendering of any decoded record
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
