//! Endpoint descriptors produced by discovery

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Identity and dial configuration for one network destination.
///
/// Descriptors are produced by the discovery source and never mutated by this
/// crate. Two descriptors are equal iff host, port, and every parameter are
/// equal; that value equality is the identity used when diffing a discovered
/// set against the registry (discovery hands back fresh instances each cycle,
/// so reference identity would never match).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Host name or address
    pub host: String,
    /// Port
    pub port: u16,
    /// Dial and runtime parameters
    #[serde(default)]
    pub params: EndpointParams,
}

/// Per-endpoint parameter set.
///
/// Typed fields cover everything this crate interprets; anything else the
/// discovery source attaches rides along in `extra` and still participates in
/// identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointParams {
    /// Whether this endpoint should be connected to at all. Inactive
    /// endpoints are never dialed, matching a discovery source that lists
    /// nodes it knows about but has taken out of rotation.
    #[serde(default)]
    pub active: bool,
    /// Number of physical connections in the invoker's pool; client default
    /// if absent
    #[serde(default)]
    pub connections: Option<u32>,
    /// TCP_NODELAY on each connection
    #[serde(default)]
    pub tcp_no_delay: bool,
    /// Dial timeout; client default if absent
    #[serde(default)]
    pub connect_timeout: Option<Duration>,
    /// Synchronous call timeout; client default if absent
    #[serde(default)]
    pub sync_timeout: Option<Duration>,
    /// Asynchronous call timeout; client default if absent
    #[serde(default)]
    pub async_timeout: Option<Duration>,
    /// Dial UDP instead of TCP
    #[serde(default)]
    pub udp_mode: bool,
    /// Uninterpreted protocol-specific parameters
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl EndpointDescriptor {
    /// Create a descriptor with default parameters (inactive until the
    /// discovery source says otherwise)
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            params: EndpointParams::default(),
        }
    }

    /// Builder-style setter for active
    pub fn with_active(mut self, active: bool) -> Self {
        self.params.active = active;
        self
    }

    /// Builder-style setter for the pool connection count
    pub fn with_connections(mut self, connections: u32) -> Self {
        self.params.connections = Some(connections);
        self
    }

    /// Builder-style setter for tcp_no_delay
    pub fn with_tcp_no_delay(mut self, tcp_no_delay: bool) -> Self {
        self.params.tcp_no_delay = tcp_no_delay;
        self
    }

    /// Builder-style setter for connect_timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.params.connect_timeout = Some(timeout);
        self
    }

    /// Builder-style setter for sync_timeout
    pub fn with_sync_timeout(mut self, timeout: Duration) -> Self {
        self.params.sync_timeout = Some(timeout);
        self
    }

    /// Builder-style setter for async_timeout
    pub fn with_async_timeout(mut self, timeout: Duration) -> Self {
        self.params.async_timeout = Some(timeout);
        self
    }

    /// Builder-style setter for udp_mode
    pub fn with_udp_mode(mut self, udp_mode: bool) -> Self {
        self.params.udp_mode = udp_mode;
        self
    }

    /// Builder-style setter for an uninterpreted extra parameter
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.extra.insert(key.into(), value.into());
        self
    }

    /// `host:port` rendering used in logs and error messages
    pub fn identity_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
