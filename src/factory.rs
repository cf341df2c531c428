//! Connection pool factory

use crate::config::{ClientConfig, EndpointDescriptor};
use crate::error::CreationError;
use crate::invoker::{Invoker, PooledInvoker};
use crate::transport::{Connection, DialOptions, Transport};
use async_trait::async_trait;
use std::sync::Arc;

/// Builds an invoker for a discovered endpoint.
///
/// The capability the reconciler holds; one implementation per wire protocol.
/// Creation failures identify the endpoint so the reconciler can skip it
/// without aborting the rest of the batch.
#[async_trait]
pub trait InvokerFactory: Send + Sync {
    async fn create(&self, endpoint: &EndpointDescriptor)
        -> Result<Arc<dyn Invoker>, CreationError>;
}

/// Factory that dials a fixed number of transport connections per endpoint
/// and binds them into a [`PooledInvoker`].
pub struct PooledInvokerFactory {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl PooledInvokerFactory {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }
}

#[async_trait]
impl InvokerFactory for PooledInvokerFactory {
    async fn create(
        &self,
        endpoint: &EndpointDescriptor,
    ) -> Result<Arc<dyn Invoker>, CreationError> {
        let count = endpoint
            .params
            .connections
            .unwrap_or(self.config.default_connections);
        let opts = DialOptions::resolve(&endpoint.params, &self.config);

        let mut connections: Vec<Box<dyn Connection>> = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let connection = self
                .transport
                .dial(&endpoint.host, endpoint.port, &opts)
                .await
                .map_err(|source| CreationError {
                    service: self.config.service_name.clone(),
                    endpoint: endpoint.identity_string(),
                    source,
                })?;
            connections.push(connection);
        }

        tracing::debug!(
            "created invoker {} with {} connections",
            endpoint.identity_string(),
            count
        );
        Ok(Arc::new(PooledInvoker::new(endpoint.clone(), connections)))
    }
}
