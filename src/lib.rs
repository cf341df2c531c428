//! endpoint-registry - endpoint membership and connection lifecycle for RPC clients
//!
//! Given a logical service name, a [`ServiceClient`] keeps the live set of
//! invokers (connected endpoint bindings) synchronized with an external
//! discovery source. Each refresh diffs the discovered endpoint set against
//! the registry by value identity, connects newly discovered active
//! endpoints, and retires vanished ones only after a grace delay so in-flight
//! calls never lose their connection to a membership change.
//!
//! The wire protocol, the discovery mechanism, and the timer are
//! collaborators behind the [`Transport`], [`Discovery`], and [`Scheduler`]
//! traits; this crate is purely the in-process coordination layer between
//! them.
//!
//! # Example
//!
//! ```rust,no_run
//! use endpoint_registry::{
//!     ClientConfig, ConnectError, Connection, DestroyError, DialOptions, EndpointDescriptor,
//!     PooledInvokerFactory, ServiceClient, StaticDiscovery, TokioScheduler, Transport,
//! };
//! use std::sync::Arc;
//!
//! struct TcpConnection; // wraps a real socket
//!
//! impl Connection for TcpConnection {
//!     fn close(&self) -> Result<(), DestroyError> {
//!         Ok(())
//!     }
//! }
//!
//! struct TcpTransport;
//!
//! #[async_trait::async_trait]
//! impl Transport for TcpTransport {
//!     async fn dial(
//!         &self,
//!         _host: &str,
//!         _port: u16,
//!         _opts: &DialOptions,
//!     ) -> Result<Box<dyn Connection>, ConnectError> {
//!         Ok(Box::new(TcpConnection))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("stress.TestServer.TestObj");
//!     let discovery = Arc::new(StaticDiscovery::new(vec![EndpointDescriptor::new(
//!         "10.0.0.1", 9000,
//!     )
//!     .with_active(true)
//!     .with_connections(2)]));
//!     let factory = Arc::new(PooledInvokerFactory::new(
//!         config.clone(),
//!         Arc::new(TcpTransport),
//!     ));
//!
//!     let client =
//!         ServiceClient::connect(config, discovery, factory, Arc::new(TokioScheduler)).await?;
//!     for invoker in client.invokers() {
//!         println!("connected to {}", invoker.endpoint().identity_string());
//!     }
//!
//!     client.refresh().await?; // on a timer or discovery notification
//!     client.destroy_all();
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod discovery;
pub mod error;
pub mod factory;
pub mod invoker;
pub mod registry;
pub mod scheduler;
pub mod transport;

// Re-exports for convenience
pub use client::ServiceClient;
pub use config::{ClientConfig, EndpointDescriptor, EndpointParams};
pub use discovery::{Discovery, StaticDiscovery};
pub use error::{
    ConnectError, CreationError, DestroyError, DiscoveryError, Error, Result,
};
pub use factory::{InvokerFactory, PooledInvokerFactory};
pub use invoker::{Invoker, PooledInvoker};
pub use registry::InvokerRegistry;
pub use scheduler::{ScheduledTask, Scheduler, TokioScheduler};
pub use transport::{Connection, DialOptions, Transport};
