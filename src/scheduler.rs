//! Deferred-task scheduler collaborator boundary

use futures::future::BoxFuture;
use std::time::Duration;

/// A deferred unit of work
pub type ScheduledTask = BoxFuture<'static, ()>;

/// Fire-and-forget delayed execution.
///
/// At-least-once best effort, no ordering guarantee relative to other
/// scheduled tasks. The client uses this for grace-delayed invoker
/// retirement; tests substitute a manual implementation that fires on demand
/// instead of sleeping.
pub trait Scheduler: Send + Sync {
    fn schedule_after(&self, delay: Duration, task: ScheduledTask);
}

/// Scheduler backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule_after(&self, delay: Duration, task: ScheduledTask) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
    }
}
