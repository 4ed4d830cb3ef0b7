use crate::listeners::key::ScheduleKey;
use crate::listeners::matcher::Matcher;

/// Selects exactly one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatcher<K> {
    key: K,
}

impl<K: ScheduleKey> KeyMatcher<K> {
    pub fn new(key: K) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: ScheduleKey> Matcher<K> for KeyMatcher<K> {
    fn is_match(&self, key: &K) -> bool {
        self.key == *key
    }
}
