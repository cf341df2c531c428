//! Service client: reconciliation and the surface exposed to dispatch

use crate::config::{ClientConfig, EndpointDescriptor};
use crate::discovery::Discovery;
use crate::error::Result;
use crate::factory::InvokerFactory;
use crate::invoker::Invoker;
use crate::registry::InvokerRegistry;
use crate::scheduler::Scheduler;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Endpoint membership core for one logical service.
///
/// Owns the invoker registry and keeps it converged with the discovery
/// source: construction does one discovery fetch to populate it, and each
/// [`refresh`](Self::refresh) diffs the current discovered set against the
/// registry, adding invokers for new active endpoints and grace-delaying the
/// destruction of removed ones. The dispatch layer above reads
/// [`invokers`](Self::invokers) snapshots concurrently at any time.
pub struct ServiceClient {
    config: ClientConfig,
    registry: Arc<InvokerRegistry>,
    discovery: Arc<dyn Discovery>,
    factory: Arc<dyn InvokerFactory>,
    scheduler: Arc<dyn Scheduler>,
    // Serializes reconciliation cycles. Registry ops are idempotent, so an
    // overlapping timer tick and discovery notification would only waste a
    // connect/teardown round; the lock removes even that.
    refresh_lock: Mutex<()>,
}

impl ServiceClient {
    /// Build a client and populate its registry from one discovery fetch.
    ///
    /// This is the only point where a discovery failure propagates: the owner
    /// must know it starts with zero reachable endpoints. Per-endpoint
    /// creation failures are isolated and logged here exactly as during
    /// refresh.
    pub async fn connect(
        config: ClientConfig,
        discovery: Arc<dyn Discovery>,
        factory: Arc<dyn InvokerFactory>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self> {
        let client = Self {
            config,
            registry: Arc::new(InvokerRegistry::new()),
            discovery,
            factory,
            scheduler,
            refresh_lock: Mutex::new(()),
        };
        tracing::info!("initializing invokers for {}", client.config.service_name);
        let discovered: HashSet<EndpointDescriptor> = client
            .discovery
            .resolve(&client.config)
            .await?
            .into_iter()
            .collect();
        client.add_endpoints(&discovered).await;
        Ok(client)
    }

    /// Logical service name this client is bound to
    pub fn service_name(&self) -> &str {
        &self.config.service_name
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Snapshot of the currently-usable invokers.
    ///
    /// An empty registry yields an empty collection, never an error; whether
    /// that is fatal is the dispatch layer's call.
    pub fn invokers(&self) -> Vec<Arc<dyn Invoker>> {
        self.registry.snapshot()
    }

    /// Reconcile the registry against the current discovered endpoint set.
    ///
    /// A discovery failure aborts the whole cycle with the registry untouched
    /// (the existing invokers stay valid, so stale beats empty) and is the
    /// only error this returns. Newly discovered active endpoints are
    /// connected and added before the call returns; invokers whose endpoints
    /// disappeared stay visible to dispatch until the grace delay elapses,
    /// then are removed and destroyed.
    pub async fn refresh(&self) -> Result<()> {
        let _cycle = self.refresh_lock.lock().await;
        tracing::info!("refreshing endpoints for {}", self.config.service_name);

        let discovered = match self.discovery.resolve(&self.config).await {
            Ok(endpoints) => endpoints,
            Err(e) => {
                tracing::error!(
                    "discovery failed for {}, keeping current invokers: {}",
                    self.config.service_name,
                    e
                );
                return Err(e.into());
            }
        };

        // Dedupe into a set first: a discovery response may repeat a
        // descriptor, and the diff must see each identity once
        let current: HashSet<EndpointDescriptor> = discovered.into_iter().collect();
        let mut registered: HashSet<EndpointDescriptor> = HashSet::new();
        let mut broken: Vec<Arc<dyn Invoker>> = Vec::new();
        for invoker in self.registry.snapshot() {
            registered.insert(invoker.endpoint().clone());
            if !current.contains(invoker.endpoint()) {
                broken.push(invoker);
            }
        }

        let fresh = current.iter().filter(|ep| !registered.contains(*ep));
        self.add_endpoints(fresh).await;

        if !broken.is_empty() {
            self.schedule_retirement(broken);
        }
        Ok(())
    }

    /// Immediately remove and destroy every invoker. Shutdown path; no grace
    /// delay, the owner has decided there will be no more calls.
    pub fn destroy_all(&self) {
        for invoker in self.registry.snapshot() {
            self.registry.remove(&invoker);
            invoker.destroy();
        }
    }

    /// Create and register invokers for each active endpoint, isolating
    /// per-endpoint failures. Shared by initial populate and refresh.
    async fn add_endpoints<'a, I>(&self, endpoints: I)
    where
        I: IntoIterator<Item = &'a EndpointDescriptor>,
    {
        for endpoint in endpoints {
            if !endpoint.params.active {
                tracing::info!(
                    "skipping inactive endpoint {}",
                    endpoint.identity_string()
                );
                continue;
            }
            match self.factory.create(endpoint).await {
                Ok(invoker) => {
                    tracing::info!("adding invoker {}", endpoint.identity_string());
                    self.registry.add(invoker);
                }
                Err(e) => {
                    // Isolated: the endpoint stays absent until a later
                    // refresh succeeds for it
                    tracing::error!("{}", e);
                }
            }
        }
    }

    /// Defer removal and destruction of retired invokers past the grace
    /// delay, so calls already dispatched against them can finish.
    fn schedule_retirement(&self, broken: Vec<Arc<dyn Invoker>>) {
        let delay = self.config.grace_delay();
        tracing::info!(
            "retiring {} invokers for {} after {:?}",
            broken.len(),
            self.config.service_name,
            delay
        );
        let registry = Arc::clone(&self.registry);
        self.scheduler.schedule_after(
            delay,
            Box::pin(async move {
                for invoker in broken {
                    tracing::info!(
                        "destroying retired invoker {}",
                        invoker.endpoint().identity_string()
                    );
                    registry.remove(&invoker);
                    invoker.destroy();
                }
            }),
        );
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service_name", &self.config.service_name)
            .field("invokers", &self.registry.len())
            .finish()
    }
}
