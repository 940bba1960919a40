//! # Handler registry - event name to ordered handler list.
//!
//! ## Rules
//! - Insertion order is invocation order (and result order).
//! - A key is created on the first registration for a name and is **never** removed,
//!   even when its last handler goes away; the list is simply left empty.
//! - Lookups of unknown names behave like an empty list.
//! - Handlers are matched by `Arc` identity; only the first match is removed.
//!
//! The registry itself is not synchronized; the emitter wraps it in a lock and never
//! holds that lock while handlers run.

use std::collections::HashMap;

use crate::core::name::EventName;
use crate::handlers::{HandlerRef, same_handler};

/// Event name → ordered handlers.
pub(crate) struct Registry<A, T, E> {
    handlers: HashMap<EventName, Vec<HandlerRef<A, T, E>>>,
}

impl<A, T, E> Registry<A, T, E> {
    /// Creates an empty registry, optionally pre-sized.
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        Self {
            handlers: capacity.map_or_else(HashMap::new, HashMap::with_capacity),
        }
    }

    /// Appends `handler` to the list for `name`, creating the list if absent.
    ///
    /// Returns the new list length.
    pub(crate) fn insert(&mut self, name: &str, handler: HandlerRef<A, T, E>) -> usize {
        match self.handlers.get_mut(name) {
            Some(list) => {
                list.push(handler);
                list.len()
            }
            None => {
                self.handlers
                    .insert(EventName::from_validated(name), vec![handler]);
                1
            }
        }
    }

    /// Removes the first occurrence of `handler` under `name`.
    ///
    /// Returns the index it was removed from, or `None` if nothing matched.
    pub(crate) fn remove(&mut self, name: &str, handler: &HandlerRef<A, T, E>) -> Option<usize> {
        let list = self.handlers.get_mut(name)?;
        let idx = list.iter().position(|h| same_handler(h, handler))?;
        list.remove(idx);
        Some(idx)
    }

    /// Number of handlers registered under `name` (0 if the name is unknown).
    pub(crate) fn count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }

    /// Copies the current handler list for `name`.
    pub(crate) fn snapshot(&self, name: &str) -> Vec<HandlerRef<A, T, E>> {
        self.handlers.get(name).cloned().unwrap_or_default()
    }

    /// Returns sorted list of known event names, including ones whose list is empty.
    pub(crate) fn names(&self) -> Vec<EventName> {
        let mut names: Vec<EventName> = self.handlers.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}
