//! Concurrent invoker registry

use crate::invoker::Invoker;
use std::sync::{Arc, RwLock};

/// The set of currently-usable invokers for one logical service.
///
/// One instance per client, passed around explicitly. Mutation and snapshot
/// are individually atomic; callers never coordinate. The lock is held only
/// across O(1) set operations: invokers are fully constructed (connections
/// established) before `add` and destroyed only after `remove`, so no network
/// I/O ever happens under it.
pub struct InvokerRegistry {
    invokers: RwLock<Vec<Arc<dyn Invoker>>>,
}

impl InvokerRegistry {
    pub fn new() -> Self {
        Self {
            invokers: RwLock::new(Vec::new()),
        }
    }

    /// Read-consistent view for iteration.
    ///
    /// Clones the `Arc`s, so dispatchers iterate without blocking concurrent
    /// refresh cycles. Linearizable per call, not a registry-wide
    /// point-in-time snapshot across calls.
    pub fn snapshot(&self) -> Vec<Arc<dyn Invoker>> {
        self.read().clone()
    }

    /// Insert an invoker.
    ///
    /// A second invoker with the same endpoint identity is a caller error
    /// (overlapping refresh cycles can produce one); it is logged and
    /// inserted alongside rather than rejected, since both are usable and the
    /// next reconciliation converges.
    pub fn add(&self, invoker: Arc<dyn Invoker>) {
        let mut invokers = self.write();
        if invokers
            .iter()
            .any(|existing| existing.endpoint() == invoker.endpoint())
        {
            tracing::warn!(
                "duplicate invoker for {} in registry",
                invoker.endpoint().identity_string()
            );
        }
        invokers.push(invoker);
    }

    /// Remove an invoker previously obtained from this registry. Removing an
    /// absent invoker is a no-op. Returns whether anything was removed.
    pub fn remove(&self, invoker: &Arc<dyn Invoker>) -> bool {
        let mut invokers = self.write();
        let before = invokers.len();
        invokers.retain(|existing| !Arc::ptr_eq(existing, invoker));
        invokers.len() < before
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Lock poisoning only happens if a panic fired inside one of the O(1)
    // sections above; the Vec is still structurally sound, so keep serving.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<dyn Invoker>>> {
        self.invokers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Arc<dyn Invoker>>> {
        self.invokers.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InvokerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InvokerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvokerRegistry")
            .field("len", &self.len())
            .finish()
    }
}
