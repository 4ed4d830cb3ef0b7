use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::listeners::key::{JobKey, TriggerKey};
use crate::listeners::matcher::{Matcher, MatcherRef};

/// Catch-all matcher installed when a listener is registered without matchers
pub struct EverythingMatcher<K> {
    _key: PhantomData<fn(&K) -> bool>,
}

impl<K> EverythingMatcher<K> {
    pub fn new() -> Self {
        Self { _key: PhantomData }
    }
}

impl<K: 'static> EverythingMatcher<K> {
    /// Shared catch-all for keys of type `K`
    pub fn shared() -> MatcherRef<K> {
        Arc::new(Self::new())
    }
}

impl EverythingMatcher<JobKey> {
    pub fn all_jobs() -> MatcherRef<JobKey> {
        Self::shared()
    }
}

impl EverythingMatcher<TriggerKey> {
    pub fn all_triggers() -> MatcherRef<TriggerKey> {
        Self::shared()
    }
}

impl<K> Default for EverythingMatcher<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for EverythingMatcher<K> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K> PartialEq for EverythingMatcher<K> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<K> Eq for EverythingMatcher<K> {}

impl<K> fmt::Debug for EverythingMatcher<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EverythingMatcher")
    }
}

impl<K: 'static> Matcher<K> for EverythingMatcher<K> {
    fn is_match(&self, _key: &K) -> bool {
        true
    }
}
