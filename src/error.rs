//! Error types for endpoint-registry

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Endpoint discovery errors
    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Invoker creation errors
    #[error("creation error: {0}")]
    Creation(#[from] CreationError),

    /// Transport dial errors
    #[error("connect error: {0}")]
    Connect(#[from] ConnectError),
}

/// Discovery fetch failures, produced by the [`Discovery`](crate::Discovery)
/// collaborator.
///
/// During a refresh cycle these abort the cycle and leave the registry
/// untouched; only the initial fetch at client construction propagates to the
/// owner.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("discovery source unavailable: {0}")]
    Unavailable(String),

    #[error("invalid discovery response: {0}")]
    InvalidResponse(String),

    #[error("unknown service: {0}")]
    UnknownService(String),
}

/// A specific endpoint's connection pool failed to build.
///
/// Carries the logical service name and the endpoint identity so the log line
/// pinpoints which client lost which endpoint. Isolated per endpoint: other
/// endpoints in the same refresh cycle are unaffected.
#[derive(Error, Debug)]
#[error("failed to create invoker for {service}|{endpoint}: {source}")]
pub struct CreationError {
    /// Logical service name of the owning client
    pub service: String,
    /// Endpoint identity string (`host:port`)
    pub endpoint: String,
    /// Underlying dial failure
    #[source]
    pub source: ConnectError,
}

/// Dial failures, produced by the [`Transport`](crate::Transport) collaborator
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("connection refused by {0}")]
    Refused(String),

    #[error("connect timeout to {0}")]
    Timeout(String),

    #[error("dial failed: {0}")]
    Dial(String),
}

/// A retiring invoker's connection failed to close.
///
/// Always logged, never propagated: destroy is best-effort and keeps going
/// past individual close failures.
#[derive(Error, Debug)]
#[error("failed to close connection to {endpoint}: {reason}")]
pub struct DestroyError {
    /// Endpoint identity string of the owning invoker
    pub endpoint: String,
    /// Reason reported by the transport
    pub reason: String,
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
