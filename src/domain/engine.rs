//! Sequential fail-fast execution engine

use tracing::{Level, event};

use crate::domain::{action::ActionResult, constant::engine, error::DispatchError, snapshot::Snapshot};

/// Runs one execution attempt for a job, front-to-back over its pending actions.
///
/// Each completed action moves from the snapshot's pending list into its result list,
/// together with its output and a completion timestamp. The first failure stops the
/// attempt immediately: remaining actions are not tried, and the failed action stays at
/// the head of the pending list — it never completed, so the next retry runs it again.
/// Outputs of actions completed earlier in the run are retained; there is no rollback or
/// compensation step.
pub(crate) struct ExecutionEngine;

impl ExecutionEngine {
    pub(crate) async fn run(&self, snapshot: &mut Snapshot) -> Result<(), DispatchError> {
        while let Some(action) = snapshot.next_pending() {
            let name = action.name().to_string();
            event!(Level::DEBUG, event = engine::ACTION_STARTED, job_id = snapshot.id(), action = %name);

            match action.execute(snapshot.context(), snapshot.event()).await {
                Ok(output) => {
                    event!(Level::DEBUG, event = engine::ACTION_COMPLETED, job_id = snapshot.id(), action = %name);
                    let result = ActionResult::new(name, snapshot.event().clone(), output);
                    snapshot.complete_next(result);
                }
                Err(source) => {
                    event!(Level::ERROR, event = engine::ACTION_FAILED, job_id = snapshot.id(), action = %name,
                           error = %source);
                    return Err(DispatchError::ActionExecution { job: snapshot.id(), action: name, source });
                }
            }
        }

        snapshot.mark_succeeded();
        event!(Level::DEBUG, event = engine::JOB_SUCCEEDED, job_id = snapshot.id(), results = snapshot.results().len());
        Ok(())
    }
}
