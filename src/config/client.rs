//! Client-level configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one logical service client.
///
/// Read-only to this crate; the defaults fill in whatever a discovered
/// endpoint's parameters leave unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Logical service name, used in discovery requests and error messages
    pub service_name: String,
    /// Connections per invoker when the endpoint does not specify
    #[serde(default = "default_connections")]
    pub default_connections: u32,
    /// Dial timeout when the endpoint does not specify
    #[serde(default = "default_connect_timeout")]
    pub default_connect_timeout: Duration,
    /// Synchronous call timeout ceiling
    #[serde(default = "default_sync_timeout")]
    pub default_sync_timeout: Duration,
    /// Asynchronous call timeout ceiling
    #[serde(default = "default_async_timeout")]
    pub default_async_timeout: Duration,
}

fn default_connections() -> u32 {
    1
}

fn default_connect_timeout() -> Duration {
    Duration::from_millis(3_000)
}

fn default_sync_timeout() -> Duration {
    Duration::from_millis(3_000)
}

fn default_async_timeout() -> Duration {
    Duration::from_millis(3_000)
}

impl ClientConfig {
    /// Create a config with defaults for a logical service
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            default_connections: default_connections(),
            default_connect_timeout: default_connect_timeout(),
            default_sync_timeout: default_sync_timeout(),
            default_async_timeout: default_async_timeout(),
        }
    }

    /// Builder-style setter for default_connections
    pub fn with_default_connections(mut self, connections: u32) -> Self {
        self.default_connections = connections;
        self
    }

    /// Builder-style setter for default_connect_timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.default_connect_timeout = timeout;
        self
    }

    /// Builder-style setter for default_sync_timeout
    pub fn with_sync_timeout(mut self, timeout: Duration) -> Self {
        self.default_sync_timeout = timeout;
        self
    }

    /// Builder-style setter for default_async_timeout
    pub fn with_async_timeout(mut self, timeout: Duration) -> Self {
        self.default_async_timeout = timeout;
        self
    }

    /// Delay before a retired invoker is actually destroyed.
    ///
    /// A call dispatched just before its endpoint disappeared from discovery
    /// must be allowed to finish, so retirement waits out the longest call
    /// timeout this client hands out.
    pub fn grace_delay(&self) -> Duration {
        self.default_sync_timeout.max(self.default_async_timeout)
    }
}
