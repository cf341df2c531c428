//! Endpoint discovery collaborator boundary

use crate::config::{ClientConfig, EndpointDescriptor};
use crate::error::DiscoveryError;
use async_trait::async_trait;

/// Source of truth for which endpoints currently exist for a logical service.
///
/// Each `resolve` call is independent and must be safe to repeat; the client
/// calls it once at construction and once per refresh cycle. Implementations
/// are typically naming-service clients, but anything that can produce a
/// descriptor list fits.
#[async_trait]
pub trait Discovery: Send + Sync {
    /// Return the full set of endpoints currently known for the service
    async fn resolve(
        &self,
        config: &ClientConfig,
    ) -> Result<Vec<EndpointDescriptor>, DiscoveryError>;
}

/// Fixed endpoint list, for clients configured with direct addresses instead
/// of a naming service
#[derive(Debug, Clone, Default)]
pub struct StaticDiscovery {
    endpoints: Vec<EndpointDescriptor>,
}

impl StaticDiscovery {
    pub fn new(endpoints: Vec<EndpointDescriptor>) -> Self {
        Self { endpoints }
    }
}

#[async_trait]
impl Discovery for StaticDiscovery {
    async fn resolve(
        &self,
        _config: &ClientConfig,
    ) -> Result<Vec<EndpointDescriptor>, DiscoveryError> {
        Ok(self.endpoints.clone())
    }
}
