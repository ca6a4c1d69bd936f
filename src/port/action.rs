//! Action contract consumed by the dispatcher

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::event::Event;

/// A single event handler: a named unit of work invoked in registration order while an
/// event is processed.
///
/// Actions are registered independently of any event and the same instance is reused
/// across many jobs, so implementations hold no per-job state. The input mapping is the
/// submitted event; the output mapping is recorded in the job's snapshot. No schema is
/// imposed on either beyond "string keys to dynamic values".
///
/// The cancellation token is the scope the event was dispatched under. The engine does
/// not poll it between actions — an action that wants to stop early observes the token
/// itself; an action that ignores a cancelled token keeps the pipeline running.
#[async_trait]
pub trait Action: Send + Sync {
    /// Name identifying this action, unique within a registry
    fn name(&self) -> &str;

    /// Execute the unit of work for one event
    async fn execute(&self, context: &CancellationToken, input: &Event) -> anyhow::Result<Event>;
}
