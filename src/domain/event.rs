//! Core event type driving one pipeline execution

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of one end-to-end handling series (original dispatch plus any retries) for
/// a single event. Assigned by the dispatcher in strictly increasing order starting at 0,
/// never reused.
pub type JobId = u64;

/// Key-value representation of a happening in a system. Events are transferred between
/// services to communicate and provide the data required for handling.
///
/// Values are dynamically typed so heterogeneous actions can share one input shape
/// without a common schema. An event is immutable once submitted; every action receives
/// it by reference as its input mapping. The dispatcher rejects empty events at the
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(HashMap<String, Value>);

impl Event {
    /// Empty event. Valid as an action output, invalid as a dispatch input.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a key-value pair, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Value stored under the key, if any
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the key-value pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for Event {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Event {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
