//! Job snapshots: plan, progress and outcome

use std::{fmt, sync::Arc};

use tokio_util::sync::CancellationToken;

use crate::{
    domain::{
        action::ActionResult,
        event::{Event, JobId}
    },
    port::action::Action
};

/// Record of one job: the originating event, the cancellation scope active at dispatch
/// time, the actions still pending and the results of those already completed.
///
/// The pending list is fixed when the job is first dispatched — registry mutations after
/// that point never alter it. Results are append-only, and the sum of completed and
/// pending actions stays equal to the plan size for the snapshot's whole lifetime. Once
/// `success` turns true the snapshot is terminal and no further execution is attempted
/// against it.
///
/// Only the execution engine mutates a snapshot, while processing the job that owns it.
/// The stored context is a capability, not data, which is why a snapshot is not
/// serializable as a whole: a service persisting snapshots through its own store has to
/// reconstruct the cancellation scope at retry time.
#[derive(Clone)]
pub struct Snapshot {
    id:      JobId,
    event:   Event,
    context: CancellationToken,
    success: bool,
    results: Vec<ActionResult>,
    pending: Vec<Arc<dyn Action>>
}

impl Snapshot {
    pub(crate) fn new(id: JobId, event: Event, context: CancellationToken, plan: Vec<Arc<dyn Action>>) -> Self {
        Self { id, event, context, success: false, results: Vec::new(), pending: plan }
    }

    /// Job identifier this snapshot belongs to
    pub fn id(&self) -> JobId {
        self.id
    }

    /// The originating event
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Cancellation scope the job was dispatched under; retries run under the same scope
    pub fn context(&self) -> &CancellationToken {
        &self.context
    }

    /// True only once every action in the plan has completed without failure
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Results of the actions completed so far, in execution order
    pub fn results(&self) -> &[ActionResult] {
        &self.results
    }

    /// Names of the actions not yet successfully completed, in execution order
    pub fn pending_actions(&self) -> Vec<String> {
        self.pending.iter().map(|action| action.name().to_string()).collect()
    }

    /// Number of actions not yet successfully completed
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn next_pending(&self) -> Option<Arc<dyn Action>> {
        self.pending.first().cloned()
    }

    /// Move the head of the pending list into the result list
    pub(crate) fn complete_next(&mut self, result: ActionResult) {
        self.pending.remove(0);
        self.results.push(result);
    }

    pub(crate) fn mark_succeeded(&mut self) {
        self.success = true;
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("id", &self.id)
            .field("event", &self.event)
            .field("success", &self.success)
            .field("results", &self.results)
            .field("pending", &self.pending_actions())
            .finish()
    }
}
