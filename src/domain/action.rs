//! Records of completed actions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::event::Event;

/// Record of one successfully executed action: what it was called, the input it saw and
/// the output it produced. Appended to its job's snapshot and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult {
    /// Name of the completed action
    pub name:      String,
    /// Input mapping the action received (the originating event)
    pub input:     Event,
    /// Output mapping the action produced
    pub output:    Event,
    /// Completion timestamp
    pub timestamp: DateTime<Utc>
}

impl ActionResult {
    pub(crate) fn new(name: impl Into<String>, input: Event, output: Event) -> Self {
        Self { name: name.into(), input, output, timestamp: Utc::now() }
    }
}
