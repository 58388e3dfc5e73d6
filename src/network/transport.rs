//! HTTP transport
//!
//! Moves an encoded [`Request`] to the device and brings the reply back.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::error::{DeviceError, Result};
use crate::protocol::{Method, Request, Response};

/// Something that can carry a request to the device
///
/// Implementations make exactly one attempt per call.
pub trait Transport {
    fn send(&self, url: &str, request: &Request) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, url: &str, request: &Request) -> Result<Response> {
        (**self).send(url, request)
    }
}

/// Blocking HTTP/1.1 transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport using the config's timeout, user agent and proxy choice
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| DeviceError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, url: &str, request: &Request) -> Result<Response> {
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        if let Some(content_type) = request.content_type() {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        builder = match (&request.body, request.method) {
            (Some(body), _) => builder.body(body.to_vec()),
            // Explicit zero Content-Length for bodiless POSTs
            (None, Method::Post) => builder.body(Vec::new()),
            (None, Method::Get) => builder,
        };

        let reply = builder.send()?;
        let status = reply.status().as_u16();
        let body = reply.bytes()?;

        Ok(Response::new(status, body))
    }
}
