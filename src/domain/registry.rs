//! Ordered, name-unique action registry

use std::sync::Arc;

use crate::{domain::error::DispatchError, port::action::Action};

/// The dispatcher's runtime-changeable action list.
///
/// Order is registration order: newly added actions run after all existing ones. Names
/// are unique at every observable instant. Exclusivity between mutation and plan reads
/// is the dispatcher's responsibility — the registry itself is plain data behind its
/// lock.
#[derive(Default)]
pub struct ActionRegistry {
    actions: Vec<Arc<dyn Action>>
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    /// Append an action to the end of the list. Fails with
    /// [`DispatchError::DuplicateAction`] if an action with the same name is already
    /// registered.
    pub fn add(&mut self, action: Arc<dyn Action>) -> Result<(), DispatchError> {
        if self.actions.iter().any(|existing| existing.name() == action.name()) {
            return Err(DispatchError::DuplicateAction(action.name().to_string()));
        }
        self.actions.push(action);
        Ok(())
    }

    /// Remove the action with the given name, preserving the relative order of the
    /// remainder. Fails with [`DispatchError::ActionNotFound`] if no registered action
    /// has that name.
    pub fn remove(&mut self, name: &str) -> Result<(), DispatchError> {
        match self.actions.iter().position(|action| action.name() == name) {
            Some(idx) => {
                self.actions.remove(idx);
                Ok(())
            }
            None => Err(DispatchError::ActionNotFound(name.to_string()))
        }
    }

    /// Consistent snapshot of the current order, for planning a new job
    pub fn plan(&self) -> Vec<Arc<dyn Action>> {
        self.actions.clone()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Registered action names, in execution order
    pub fn names(&self) -> Vec<String> {
        self.actions.iter().map(|action| action.name().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::domain::event::Event;

    struct Named(&'static str);

    #[async_trait]
    impl Action for Named {
        fn name(&self) -> &str {
            self.0
        }

        async fn execute(&self, _context: &CancellationToken, _input: &Event) -> anyhow::Result<Event> {
            Ok(Event::new())
        }
    }

    #[test]
    fn add_keeps_registration_order_and_rejects_duplicates() {
        let mut registry = ActionRegistry::new();
        registry.add(Arc::new(Named("first"))).unwrap();
        registry.add(Arc::new(Named("second"))).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["first", "second"]);

        let err = registry.add(Arc::new(Named("first"))).unwrap_err();
        assert!(matches!(err, DispatchError::DuplicateAction(name) if name == "first"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut registry = ActionRegistry::new();
        registry.add(Arc::new(Named("first"))).unwrap();
        registry.add(Arc::new(Named("second"))).unwrap();
        registry.add(Arc::new(Named("third"))).unwrap();

        registry.remove("second").unwrap();
        assert_eq!(registry.names(), vec!["first", "third"]);
    }

    #[test]
    fn remove_of_unknown_action_fails() {
        let mut registry = ActionRegistry::new();
        registry.add(Arc::new(Named("first"))).unwrap();

        let err = registry.remove("ghost").unwrap_err();
        assert!(matches!(err, DispatchError::ActionNotFound(name) if name == "ghost"));
        assert_eq!(registry.len(), 1);
    }
}
