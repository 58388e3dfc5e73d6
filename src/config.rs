//! Configuration for puttlink
//!
//! Centralized configuration with sensible defaults.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{DeviceError, Result};
use crate::protocol::Endpoint;

/// Address the controller uses when it runs its own access point
pub const DEFAULT_BASE_ADDRESS: &str = "192.168.4.1";

/// Default whole-request timeout (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Main configuration for a device client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Device Configuration
    // -------------------------------------------------------------------------
    /// Host (optionally with scheme and port) the device answers on,
    /// e.g. `10.0.0.31`, `192.168.4.1:8080` or `http://10.0.0.190`
    pub base_address: String,

    /// Path overrides, keyed by endpoint. Endpoints missing here use
    /// their default path.
    pub endpoint_paths: HashMap<Endpoint, String>,

    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Whole-request timeout (milliseconds), 0 disables it
    pub timeout_ms: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Honour `HTTP_PROXY`/`ALL_PROXY` from the environment. Off by default,
    /// the device sits on the local network.
    pub use_system_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_BASE_ADDRESS.to_string(),
            endpoint_paths: HashMap::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("puttlink/{}", crate::VERSION),
            use_system_proxy: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Path used for `endpoint`, honouring overrides
    pub fn path(&self, endpoint: Endpoint) -> &str {
        self.endpoint_paths
            .get(&endpoint)
            .map(String::as_str)
            .unwrap_or_else(|| endpoint.default_path())
    }

    /// Base URL with scheme and without trailing slash
    pub fn base_url(&self) -> Result<String> {
        let raw = self.base_address.trim();
        let rest = match raw.split_once("://") {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("http") => rest,
            Some((scheme, _)) => {
                return Err(DeviceError::Config(format!(
                    "device speaks plain HTTP only, got scheme {:?}",
                    scheme
                )));
            }
            None => raw,
        };

        let host = rest.trim_end_matches('/');
        if host.is_empty() {
            return Err(DeviceError::Config("base address cannot be empty".to_string()));
        }
        if host.contains(char::is_whitespace) {
            return Err(DeviceError::Config(format!(
                "invalid base address: {:?}",
                self.base_address
            )));
        }

        Ok(format!("http://{}", host))
    }

    /// Full URL for `endpoint`
    pub fn url(&self, endpoint: Endpoint) -> Result<String> {
        let base = self.base_url()?;
        let path = self.path(endpoint);
        if path.starts_with('/') {
            Ok(format!("{}{}", base, path))
        } else {
            Ok(format!("{}/{}", base, path))
        }
    }

    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        for (endpoint, path) in &self.endpoint_paths {
            if path.trim().is_empty() {
                return Err(DeviceError::Config(format!(
                    "empty path override for {:?}",
                    endpoint
                )));
            }
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the device base address
    pub fn base_address(mut self, address: impl Into<String>) -> Self {
        self.config.base_address = address.into();
        self
    }

    /// Override the path of a single endpoint
    pub fn endpoint_path(mut self, endpoint: Endpoint, path: impl Into<String>) -> Self {
        self.config.endpoint_paths.insert(endpoint, path.into());
        self
    }

    /// Set the request timeout (in milliseconds)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Route requests through the proxy named in the environment
    pub fn use_system_proxy(mut self, enabled: bool) -> Self {
        self.config.use_system_proxy = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
