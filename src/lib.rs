//! # puttlink
//!
//! Client for the HTTP protocol spoken by a putting-course controller:
//! - Typed requests for every device endpoint
//! - Raw byte payloads (course state, settings, dispense count)
//! - Decoded replies (stats record, error codes)
//! - Single blocking attempt per call, explicit timeout
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DeviceClient                            │
//! │             (one method per endpoint)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Protocol Codec                             │
//! │        (typed payloads <-> raw byte bodies)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Request / Response
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Transport                                │
//! │             (blocking HTTP/1.1, no retries)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │    Device     │
//!               │ (ESP HTTP srv)│
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod printer;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DeviceError, Result};
pub use config::Config;
pub use network::DeviceClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of puttlink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
