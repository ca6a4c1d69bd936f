//! The event dispatcher: registry, engine and snapshot store behind one lock

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{Level, event};

use crate::{
    adapter::store::InMemorySnapshotStore,
    domain::{
        constant::dispatcher,
        engine::ExecutionEngine,
        error::DispatchError,
        event::{Event, JobId},
        registry::ActionRegistry,
        snapshot::Snapshot
    },
    port::{action::Action, store::SnapshotStore}
};

/// Concurrency-safe, runtime-changeable action list that sends incoming events to the
/// actions and keeps the execution context, state and result of every job as a snapshot.
///
/// One exclusive lock serializes registry mutation, dispatch and retry: at most one of
/// [`add_action`](Self::add_action), [`remove_action`](Self::remove_action),
/// [`handle_event`](Self::handle_event) and [`retry_job`](Self::retry_job) runs at a
/// time across all callers. That yields the registry-order and id-assignment guarantees
/// without further synchronization, at the price of serializing action execution behind
/// the same lock — a slow action blocks unrelated dispatcher operations, including new
/// events.
pub struct EventDispatcher {
    inner: Mutex<DispatcherInner>
}

struct DispatcherInner {
    registry:    ActionRegistry,
    engine:      ExecutionEngine,
    store:       Box<dyn SnapshotStore>,
    next_job_id: JobId
}

impl EventDispatcher {
    /// Dispatcher backed by the in-memory snapshot store
    pub fn new() -> Self {
        Self::with_store(Box::new(InMemorySnapshotStore::new()))
    }

    /// Dispatcher over a caller-provided snapshot store
    pub fn with_store(store: Box<dyn SnapshotStore>) -> Self {
        Self {
            inner: Mutex::new(DispatcherInner {
                registry: ActionRegistry::new(),
                engine: ExecutionEngine,
                store,
                next_job_id: 0
            })
        }
    }

    /// Register an action which from now on is called for incoming events, after all
    /// previously registered ones. Fails with [`DispatchError::DuplicateAction`] if the
    /// name is already taken.
    pub async fn add_action(&self, action: Arc<dyn Action>) -> Result<(), DispatchError> {
        let mut inner = self.inner.lock().await;
        inner.registry.add(action.clone())?;
        event!(Level::DEBUG, event = dispatcher::ACTION_ADDED, action = %action.name());
        Ok(())
    }

    /// Unregister the named action so further events no longer reach it. Fails with
    /// [`DispatchError::ActionNotFound`] if no such action is registered. Jobs already
    /// dispatched keep their plan.
    pub async fn remove_action(&self, name: &str) -> Result<(), DispatchError> {
        let mut inner = self.inner.lock().await;
        inner.registry.remove(name)?;
        event!(Level::DEBUG, event = dispatcher::ACTION_REMOVED, action = %name);
        Ok(())
    }

    /// Run all currently registered actions for the event and preserve the handling
    /// snapshot under the returned job id.
    ///
    /// An empty event is rejected with [`DispatchError::InvalidEvent`] before any job id
    /// is assigned. Otherwise the id is assigned and stays valid for
    /// [`retry_job`](Self::retry_job) whatever the outcome: if an action fails, the
    /// returned [`DispatchError::ActionExecution`] names it and carries that id.
    pub async fn handle_event(&self, context: CancellationToken, event: Event) -> Result<JobId, DispatchError> {
        let mut inner = self.inner.lock().await;

        if event.is_empty() {
            event!(Level::WARN, event = dispatcher::EVENT_REJECTED, reason = "empty event");
            return Err(DispatchError::InvalidEvent);
        }

        let plan = inner.registry.plan();
        let job = inner.next_job_id;
        inner.next_job_id += 1;
        event!(Level::DEBUG, event = dispatcher::JOB_DISPATCHED, job_id = job, planned = plan.len());

        let mut snapshot = Snapshot::new(job, event, context, plan);
        let outcome = inner.engine.run(&mut snapshot).await;
        inner.store.put(snapshot).await?;

        outcome.map(|()| job)
    }

    /// Load the snapshot stored under the job id and try to finish the event handling by
    /// executing the actions that had not completed when the event was last processed,
    /// under the originally stored context. The job id is unchanged and further retries
    /// stay possible until the job succeeds.
    ///
    /// Fails with [`DispatchError::InvalidJobId`] if the id was never assigned and with
    /// [`DispatchError::JobAlreadySucceeded`] if there is nothing left to do.
    pub async fn retry_job(&self, job: JobId) -> Result<(), DispatchError> {
        let mut inner = self.inner.lock().await;

        let mut snapshot = inner.store.get(job).await?;
        if snapshot.is_success() {
            return Err(DispatchError::JobAlreadySucceeded(job));
        }
        event!(Level::DEBUG, event = dispatcher::JOB_RETRYING, job_id = job, remaining = snapshot.pending_count());

        let outcome = inner.engine.run(&mut snapshot).await;
        inner.store.put(snapshot).await?;

        outcome
    }

    /// Stored snapshot of a job, failing with [`DispatchError::InvalidJobId`] for ids
    /// never assigned
    pub async fn snapshot(&self, job: JobId) -> Result<Snapshot, DispatchError> {
        let inner = self.inner.lock().await;
        inner.store.get(job).await
    }

    /// Names of the currently registered actions, in execution order
    pub async fn action_names(&self) -> Vec<String> {
        let inner = self.inner.lock().await;
        inner.registry.names()
    }

    /// Number of currently registered actions
    pub async fn action_count(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.registry.len()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
