//! # Event Dispatcher
//!
//! A sequential action pipeline: incoming events are pushed through an ordered list of
//! named actions, execution stops at the first failure and the exact point of failure is
//! recorded in a snapshot, so a later retry resumes from the first action that did not
//! complete — without re-running actions that already succeeded.
//!
//! This crate provides:
//! - A concurrency-safe, runtime-changeable action registry
//! - Fail-fast sequential execution with a per-action result trail
//! - Snapshots that make partial failure recoverable via explicit retry
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use dispatcher::{Action, Event, EventDispatcher};
//! use tokio_util::sync::CancellationToken;
//!
//! struct Greet;
//!
//! #[async_trait]
//! impl Action for Greet {
//!     fn name(&self) -> &str {
//!         "greet"
//!     }
//!
//!     async fn execute(&self, _context: &CancellationToken, input: &Event) -> anyhow::Result<Event> {
//!         let name = input.get("name").and_then(|value| value.as_str()).unwrap_or("world");
//!         Ok(Event::new().with("greeting", format!("hello, {name}")))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), dispatcher::DispatchError> {
//! let dispatcher = EventDispatcher::new();
//! dispatcher.add_action(Arc::new(Greet)).await?;
//!
//! let job = dispatcher.handle_event(CancellationToken::new(), Event::new().with("name", "ada")).await?;
//!
//! let snapshot = dispatcher.snapshot(job).await?;
//! assert!(snapshot.is_success());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod domain;
pub mod port;

// Re-export the public surface
pub use adapter::store::InMemorySnapshotStore;
pub use domain::{
    action::ActionResult,
    dispatcher::EventDispatcher,
    error::DispatchError,
    event::{Event, JobId},
    registry::ActionRegistry,
    snapshot::Snapshot
};
pub use port::{action::Action, store::SnapshotStore};
