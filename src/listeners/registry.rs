//! Name-keyed registry for job and trigger listeners.
//!
//! Listeners and their matcher lists live in one struct behind a single
//! `parking_lot::RwLock`, so a reader never sees a listener without the
//! matcher list installed by the same `register` call. Every read returns an
//! owned snapshot taken while the lock is held.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::listeners::error::{ListenerError, ListenerResult};
use crate::listeners::key::{JobKey, TriggerKey};
use crate::listeners::matcher::{EverythingMatcher, Matcher, MatcherRef};
use crate::listeners::types::{JobListener, ListenerKind, NamedListener, TriggerListener};

/// Registry of job listeners keyed by listener name
pub type JobListenerRegistry = KeyListenerRegistry<dyn JobListener, JobKey>;

/// Registry of trigger listeners keyed by listener name
pub type TriggerListenerRegistry = KeyListenerRegistry<dyn TriggerListener, TriggerKey>;

const DEFAULT_CAPACITY: usize = 10;

struct RegistryState<L: ?Sized, K> {
    /// Insertion-ordered; re-registering a name keeps its slot
    listeners: Vec<(String, Arc<L>)>,
    matchers: HashMap<String, Vec<MatcherRef<K>>>,
}

impl<L: ?Sized, K> RegistryState<L, K> {
    fn position(&self, name: &str) -> Option<usize> {
        self.listeners.iter().position(|(n, _)| n == name)
    }
}

/// Listener registry parameterised over the listener trait object `L` and
/// the key type `K` its matchers select on.
pub struct KeyListenerRegistry<L: ?Sized, K> {
    kind: ListenerKind,
    prune_matchers_on_unregister: bool,
    state: RwLock<RegistryState<L, K>>,
}

impl JobListenerRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_kind(ListenerKind::Job, capacity)
    }
}

impl Default for JobListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerListenerRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_kind(ListenerKind::Trigger, capacity)
    }
}

impl Default for TriggerListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, K> KeyListenerRegistry<L, K>
where
    L: NamedListener + ?Sized,
    K: 'static,
{
    fn with_kind(kind: ListenerKind, capacity: usize) -> Self {
        Self {
            kind,
            prune_matchers_on_unregister: false,
            state: RwLock::new(RegistryState {
                listeners: Vec::with_capacity(capacity),
                matchers: HashMap::with_capacity(capacity),
            }),
        }
    }

    /// Drop the matcher list together with the listener on `unregister`.
    ///
    /// Off by default: an unregistered name keeps its matchers, and they stay
    /// readable through [`matchers`](Self::matchers) and writable through the
    /// matcher operations.
    pub fn prune_matchers_on_unregister(mut self, prune: bool) -> Self {
        self.prune_matchers_on_unregister = prune;
        self
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// Register `listener` with the catch-all matcher
    pub fn register(&self, listener: Arc<L>) -> ListenerResult<()> {
        self.register_with_matchers(listener, Vec::new())
    }

    /// Register `listener` with a single matcher
    pub fn register_with_matcher(
        &self,
        listener: Arc<L>,
        matcher: MatcherRef<K>,
    ) -> ListenerResult<()> {
        self.register_with_matchers(listener, vec![matcher])
    }

    /// Register `listener` with `matchers`, replacing any listener and matcher
    /// list previously held under the same name. An empty `matchers` installs
    /// the catch-all matcher.
    pub fn register_with_matchers(
        &self,
        listener: Arc<L>,
        matchers: Vec<MatcherRef<K>>,
    ) -> ListenerResult<()> {
        let name = listener.name().to_string();
        if name.is_empty() {
            return Err(ListenerError::invalid_argument(
                "listener",
                format!("{} listener name cannot be empty", self.kind),
            ));
        }

        let matchers = if matchers.is_empty() {
            vec![EverythingMatcher::<K>::shared()]
        } else {
            matchers
        };
        let matcher_count = matchers.len();

        let replaced = {
            let mut state = self.state.write();
            let replaced = match state.position(&name) {
                Some(index) => {
                    state.listeners[index].1 = listener;
                    true
                }
                None => {
                    state.listeners.push((name.clone(), listener));
                    false
                }
            };
            state.matchers.insert(name.clone(), matchers);
            replaced
        };

        tracing::debug!(
            kind = %self.kind,
            listener = %name,
            matchers = matcher_count,
            replaced,
            "Registered listener"
        );
        Ok(())
    }

    /// Append `matcher` to the list held for `name`.
    ///
    /// Returns `false` when no matcher list exists for `name`.
    pub fn add_matcher(&self, name: &str, matcher: MatcherRef<K>) -> bool {
        let mut state = self.state.write();
        let Some(matchers) = state.matchers.get_mut(name) else {
            tracing::trace!(kind = %self.kind, listener = %name, "No matchers to extend");
            return false;
        };
        matchers.push(matcher);
        tracing::debug!(kind = %self.kind, listener = %name, matchers = matchers.len(), "Added matcher");
        true
    }

    /// Remove the first matcher equal to `matcher` from the list held for
    /// `name`. Returns whether a matcher was removed.
    pub fn remove_matcher(&self, name: &str, matcher: &dyn Matcher<K>) -> bool {
        let mut state = self.state.write();
        let Some(matchers) = state.matchers.get_mut(name) else {
            tracing::trace!(kind = %self.kind, listener = %name, "No matchers to remove from");
            return false;
        };
        match matchers.iter().position(|m| m.eq_matcher(matcher)) {
            Some(index) => {
                matchers.remove(index);
                tracing::debug!(kind = %self.kind, listener = %name, matchers = matchers.len(), "Removed matcher");
                true
            }
            None => {
                tracing::trace!(kind = %self.kind, listener = %name, ?matcher, "Matcher not present");
                false
            }
        }
    }

    /// Snapshot of the matcher list held for `name`
    pub fn matchers(&self, name: &str) -> Option<Vec<MatcherRef<K>>> {
        self.state.read().matchers.get(name).cloned()
    }

    /// Replace the matcher list held for `name` wholesale.
    ///
    /// Presence is checked against the matcher lists, not the listeners, so
    /// this succeeds for a name that was unregistered but kept its matchers.
    /// An empty `matchers` is stored as given and disables all matching.
    pub fn set_matchers(&self, name: &str, matchers: Vec<MatcherRef<K>>) -> bool {
        let mut state = self.state.write();
        let Some(current) = state.matchers.get_mut(name) else {
            tracing::trace!(kind = %self.kind, listener = %name, "No matchers to replace");
            return false;
        };
        *current = matchers;
        tracing::debug!(kind = %self.kind, listener = %name, matchers = current.len(), "Replaced matchers");
        true
    }

    /// Remove the listener registered as `name`.
    ///
    /// The matcher list is left in place unless pruning was enabled with
    /// [`prune_matchers_on_unregister`](Self::prune_matchers_on_unregister).
    /// Callers may still read or modify matchers of an unregistered name.
    // TODO: revisit the default once no caller reads matchers after unregister;
    // names that are never registered again keep their matcher lists forever.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = {
            let mut state = self.state.write();
            let removed = match state.position(name) {
                Some(index) => {
                    state.listeners.remove(index);
                    true
                }
                None => false,
            };
            if removed && self.prune_matchers_on_unregister {
                state.matchers.remove(name);
            }
            removed
        };

        if removed {
            tracing::debug!(kind = %self.kind, listener = %name, "Unregistered listener");
        } else {
            tracing::trace!(kind = %self.kind, listener = %name, "Listener not registered");
        }
        removed
    }

    /// Snapshot of all listeners in registration order
    pub fn listeners(&self) -> Vec<Arc<L>> {
        self.state
            .read()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<L>> {
        let state = self.state.read();
        state
            .position(name)
            .map(|index| Arc::clone(&state.listeners[index].1))
    }

    /// Snapshot of every listener paired with its matcher list, taken under a
    /// single read lock. A listener whose matchers were pruned is paired with
    /// an empty list.
    pub fn listeners_with_matchers(&self) -> Vec<(Arc<L>, Vec<MatcherRef<K>>)> {
        let state = self.state.read();
        state
            .listeners
            .iter()
            .map(|(name, listener)| {
                let matchers = state.matchers.get(name).cloned().unwrap_or_default();
                (Arc::clone(listener), matchers)
            })
            .collect()
    }

    /// Listeners, in registration order, with at least one matcher selecting `key`.
    ///
    /// Matchers run after the lock is released, so a matcher may call back
    /// into the registry.
    pub fn listeners_for(&self, key: &K) -> Vec<Arc<L>> {
        self.listeners_with_matchers()
            .into_iter()
            .filter(|(_, matchers)| matchers.iter().any(|m| m.is_match(key)))
            .map(|(listener, _)| listener)
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.state.read().position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.state.read().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().listeners.is_empty()
    }

    /// Remove every listener and matcher list
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.listeners.clear();
        state.matchers.clear();
        tracing::debug!(kind = %self.kind, "Cleared listeners");
    }
}
