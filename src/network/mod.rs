//! Network Module
//!
//! HTTP client side of the device protocol.
//!
//! ## Architecture
//! - `DeviceClient` encodes commands and decodes replies
//! - `Transport` carries one request per call, no retries
//! - `HttpTransport` is the blocking reqwest implementation

mod client;
mod transport;

pub use client::DeviceClient;
pub use transport::{HttpTransport, Transport};
