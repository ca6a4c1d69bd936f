//! In-memory snapshot store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{error::DispatchError, event::JobId, snapshot::Snapshot},
    port::store::SnapshotStore
};

/// HashMap-backed store keeping snapshots for the lifetime of the process.
///
/// Snapshots are never deleted here: retention and eviction, like durability, are the
/// surrounding service's concern.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    snapshots: RwLock<HashMap<JobId, Snapshot>>
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self { snapshots: RwLock::new(HashMap::new()) }
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn put(&self, snapshot: Snapshot) -> Result<(), DispatchError> {
        let mut store = self.snapshots.write().await;
        store.insert(snapshot.id(), snapshot);
        Ok(())
    }

    async fn get(&self, job: JobId) -> Result<Snapshot, DispatchError> {
        let store = self.snapshots.read().await;
        store.get(&job).cloned().ok_or(DispatchError::InvalidJobId(job))
    }
}

#[cfg(test)]
mod tests {
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::domain::event::Event;

    #[tokio::test]
    async fn get_of_undispatched_id_fails() {
        let store = InMemorySnapshotStore::new();

        let err = store.get(3).await.unwrap_err();
        assert!(matches!(err, DispatchError::InvalidJobId(3)));
    }

    #[tokio::test]
    async fn put_overwrites_per_attempt() {
        let store = InMemorySnapshotStore::new();
        let event = Event::new().with("key", "value");

        let snapshot = Snapshot::new(7, event.clone(), CancellationToken::new(), Vec::new());
        store.put(snapshot).await.unwrap();

        let stored = store.get(7).await.unwrap();
        assert_eq!(stored.id(), 7);
        assert_eq!(stored.event(), &event);
        assert!(!stored.is_success());

        // A later attempt stores the updated snapshot under the same id
        let mut updated = stored;
        updated.mark_succeeded();
        store.put(updated).await.unwrap();

        assert!(store.get(7).await.unwrap().is_success());
    }
}
