//! Common error types for the dispatcher

use thiserror::Error;

use crate::domain::event::JobId;

/// Error taxonomy of the dispatcher. Every variant is a normal, typed outcome the caller
/// can inspect and act on; there is no fatal internal error class.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An action with the same name is already registered
    #[error("action with name {0} already exists")]
    DuplicateAction(String),

    /// No registered action has that name
    #[error("action {0} doesn't exist")]
    ActionNotFound(String),

    /// An empty event was submitted for handling
    #[error("event must not be empty")]
    InvalidEvent,

    /// An action returned a failure during job execution
    #[error("{action} action failed for job {job}: {source}")]
    ActionExecution {
        /// Job the action was running for
        job:    JobId,
        /// Name of the failing action
        action: String,
        /// Underlying cause reported by the action
        #[source]
        source: anyhow::Error
    },

    /// The job id was never assigned by a dispatch
    #[error("invalid job id {0}")]
    InvalidJobId(JobId),

    /// Retry was called for a job that already completed successfully
    #[error("retry called for the successfully completed job {0}")]
    JobAlreadySucceeded(JobId)
}

impl DispatchError {
    /// Job id carried by the error, when the error concerns a specific job. A failed
    /// dispatch reports the assigned id here, so the caller can still retry the job.
    pub fn job_id(&self) -> Option<JobId> {
        match self {
            DispatchError::ActionExecution { job, .. } => Some(*job),
            DispatchError::InvalidJobId(job) | DispatchError::JobAlreadySucceeded(job) => Some(*job),
            _ => None
        }
    }
}
