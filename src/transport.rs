//! Transport collaborator boundary
//!
//! The wire protocol lives outside this crate. The registry core only needs
//! to open connections with per-endpoint dial parameters and close them
//! again; everything between those two moments belongs to the protocol layer.

use crate::config::{ClientConfig, EndpointParams};
use crate::error::{ConnectError, DestroyError};
use async_trait::async_trait;
use std::time::Duration;

/// Dial parameters for one physical connection, resolved from the endpoint's
/// parameters with the client defaults filled in.
///
/// Enforcement is the transport's job; this crate only plumbs the values
/// through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialOptions {
    pub tcp_no_delay: bool,
    pub connect_timeout: Duration,
    pub sync_timeout: Duration,
    pub async_timeout: Duration,
    pub udp_mode: bool,
}

impl DialOptions {
    /// Resolve dial options for an endpoint under a client's defaults
    pub fn resolve(params: &EndpointParams, config: &ClientConfig) -> Self {
        Self {
            tcp_no_delay: params.tcp_no_delay,
            connect_timeout: params
                .connect_timeout
                .unwrap_or(config.default_connect_timeout),
            sync_timeout: params.sync_timeout.unwrap_or(config.default_sync_timeout),
            async_timeout: params
                .async_timeout
                .unwrap_or(config.default_async_timeout),
            udp_mode: params.udp_mode,
        }
    }
}

/// One physical connection.
///
/// `close` must be idempotent: a connection is closed once by its invoker's
/// destroy, but shutdown paths may race with deferred retirement.
pub trait Connection: Send + Sync {
    fn close(&self) -> Result<(), DestroyError>;
}

/// Opens physical connections. One implementation per wire protocol.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dial(
        &self,
        host: &str,
        port: u16,
        opts: &DialOptions,
    ) -> Result<Box<dyn Connection>, ConnectError>;
}
