//! Invokers: live, connected bindings to one endpoint

use crate::config::EndpointDescriptor;
use crate::transport::Connection;
use std::sync::atomic::{AtomicBool, Ordering};

/// A live binding to one RPC endpoint, backed by a pool of physical
/// connections.
///
/// Owned by the registry from `add` until `remove`; a dispatcher holding a
/// snapshot may keep using an invoker past its removal, which is exactly what
/// the grace-delayed destroy protects. Call dispatch itself lives in the
/// protocol layer above this crate.
pub trait Invoker: Send + Sync {
    /// The descriptor this invoker was created from
    fn endpoint(&self) -> &EndpointDescriptor;

    /// Release every connection in the pool. Idempotent; close failures are
    /// logged and skipped, never propagated.
    fn destroy(&self);
}

/// Invoker over a fixed-size pool of transport connections
pub struct PooledInvoker {
    endpoint: EndpointDescriptor,
    connections: Vec<Box<dyn Connection>>,
    destroyed: AtomicBool,
}

impl PooledInvoker {
    pub(crate) fn new(endpoint: EndpointDescriptor, connections: Vec<Box<dyn Connection>>) -> Self {
        Self {
            endpoint,
            connections,
            destroyed: AtomicBool::new(false),
        }
    }

    /// Number of physical connections in the pool
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Whether destroy has already run
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }
}

impl Invoker for PooledInvoker {
    fn endpoint(&self) -> &EndpointDescriptor {
        &self.endpoint
    }

    fn destroy(&self) {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::info!("destroying invoker {}", self.endpoint.identity_string());
        for connection in &self.connections {
            if let Err(e) = connection.close() {
                // Best-effort: keep closing the rest of the pool
                tracing::error!("error closing connection: {}", e);
            }
        }
    }
}

impl std::fmt::Debug for PooledInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledInvoker")
            .field("endpoint", &self.endpoint.identity_string())
            .field("connections", &self.connections.len())
            .field("destroyed", &self.is_destroyed())
            .finish()
    }
}
