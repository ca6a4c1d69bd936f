//! Snapshot persistence port

use async_trait::async_trait;

use crate::domain::{error::DispatchError, event::JobId, snapshot::Snapshot};

/// Port for keeping job snapshots between execution attempts.
///
/// One snapshot per job id; `put` overwrites on every attempt. The dispatcher ships with
/// [`InMemorySnapshotStore`](crate::adapter::store::InMemorySnapshotStore); anything
/// durable is the surrounding service's concern and plugs in through this trait.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Store or overwrite the snapshot under its job id
    async fn put(&self, snapshot: Snapshot) -> Result<(), DispatchError>;

    /// Load the snapshot for a job, failing with [`DispatchError::InvalidJobId`] if the
    /// id was never dispatched
    async fn get(&self, job: JobId) -> Result<Snapshot, DispatchError>;
}
