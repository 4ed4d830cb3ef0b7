use std::fmt;

use crate::listeners::matcher::{Matcher, MatcherRef};

/// Matches when both operands match
#[derive(Debug, Clone)]
pub struct AndMatcher<K> {
    left: MatcherRef<K>,
    right: MatcherRef<K>,
}

impl<K> AndMatcher<K> {
    pub fn new(left: MatcherRef<K>, right: MatcherRef<K>) -> Self {
        Self { left, right }
    }
}

impl<K> PartialEq for AndMatcher<K> {
    fn eq(&self, other: &Self) -> bool {
        *self.left == *other.left && *self.right == *other.right
    }
}

impl<K: fmt::Debug + 'static> Matcher<K> for AndMatcher<K> {
    fn is_match(&self, key: &K) -> bool {
        self.left.is_match(key) && self.right.is_match(key)
    }
}

/// Matches when either operand matches
#[derive(Debug, Clone)]
pub struct OrMatcher<K> {
    left: MatcherRef<K>,
    right: MatcherRef<K>,
}

impl<K> OrMatcher<K> {
    pub fn new(left: MatcherRef<K>, right: MatcherRef<K>) -> Self {
        Self { left, right }
    }
}

impl<K> PartialEq for OrMatcher<K> {
    fn eq(&self, other: &Self) -> bool {
        *self.left == *other.left && *self.right == *other.right
    }
}

impl<K: fmt::Debug + 'static> Matcher<K> for OrMatcher<K> {
    fn is_match(&self, key: &K) -> bool {
        self.left.is_match(key) || self.right.is_match(key)
    }
}

/// Inverts its operand
#[derive(Debug, Clone)]
pub struct NotMatcher<K> {
    operand: MatcherRef<K>,
}

impl<K> NotMatcher<K> {
    pub fn new(operand: MatcherRef<K>) -> Self {
        Self { operand }
    }
}

impl<K> PartialEq for NotMatcher<K> {
    fn eq(&self, other: &Self) -> bool {
        *self.operand == *other.operand
    }
}

impl<K: fmt::Debug + 'static> Matcher<K> for NotMatcher<K> {
    fn is_match(&self, key: &K) -> bool {
        !self.operand.is_match(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::key::JobKey;
    use crate::listeners::matcher::{matcher, GroupMatcher, NameMatcher};

    fn billing() -> MatcherRef<JobKey> {
        matcher(GroupMatcher::<JobKey>::equals("billing"))
    }

    fn invoice() -> MatcherRef<JobKey> {
        matcher(NameMatcher::<JobKey>::starts_with("invoice"))
    }

    #[test]
    fn test_and_or_not() {
        let key = JobKey::new("invoice-eu", "billing");
        let other = JobKey::new("invoice-eu", "DEFAULT");

        let and = AndMatcher::new(billing(), invoice());
        assert!(and.is_match(&key));
        assert!(!and.is_match(&other));

        let or = OrMatcher::new(billing(), invoice());
        assert!(or.is_match(&other));

        let not = NotMatcher::new(billing());
        assert!(!not.is_match(&key));
        assert!(not.is_match(&other));
    }

    #[test]
    fn test_composites_compare_by_value() {
        assert_eq!(AndMatcher::new(billing(), invoice()), AndMatcher::new(billing(), invoice()));
        assert_ne!(AndMatcher::new(billing(), invoice()), AndMatcher::new(invoice(), billing()));
        assert_eq!(NotMatcher::new(billing()), NotMatcher::new(billing()));
    }
}
