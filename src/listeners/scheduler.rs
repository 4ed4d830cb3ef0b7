use std::sync::Arc;

use parking_lot::Mutex;

use crate::listeners::types::SchedulerListener;

/// Mutex-guarded list of scheduler listeners.
///
/// Scheduler listeners receive every scheduler event, so there is no name and
/// no matcher list. The same listener may be added more than once.
pub struct SchedulerListenerList {
    listeners: Mutex<Vec<Arc<dyn SchedulerListener>>>,
}

impl SchedulerListenerList {
    pub fn new() -> Self {
        Self::with_capacity(10)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            listeners: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn add(&self, listener: Arc<dyn SchedulerListener>) {
        let count = {
            let mut listeners = self.listeners.lock();
            listeners.push(listener);
            listeners.len()
        };
        tracing::debug!(listeners = count, "Added scheduler listener");
    }

    /// Remove one occurrence of `listener`, compared by allocation
    pub fn remove(&self, listener: &Arc<dyn SchedulerListener>) -> bool {
        let mut listeners = self.listeners.lock();
        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(index) => {
                listeners.remove(index);
                tracing::debug!(listeners = listeners.len(), "Removed scheduler listener");
                true
            }
            None => {
                tracing::trace!("Scheduler listener not registered");
                false
            }
        }
    }

    /// Snapshot in insertion order
    pub fn listeners(&self) -> Vec<Arc<dyn SchedulerListener>> {
        self.listeners.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    pub fn clear(&self) {
        self.listeners.lock().clear();
    }
}

impl Default for SchedulerListenerList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Recorder;

    impl SchedulerListener for Recorder {}

    fn recorder() -> Arc<dyn SchedulerListener> {
        Arc::new(Recorder)
    }

    #[test]
    fn test_duplicate_add_then_single_remove() {
        let list = SchedulerListenerList::new();
        let l1 = recorder();

        list.add(Arc::clone(&l1));
        list.add(Arc::clone(&l1));
        assert!(list.remove(&l1));

        let snapshot = list.listeners();
        assert_eq!(snapshot.len(), 1);
        assert!(Arc::ptr_eq(&snapshot[0], &l1));
    }

    #[test]
    fn test_remove_unknown_listener() {
        let list = SchedulerListenerList::new();
        list.add(recorder());

        assert!(!list.remove(&recorder()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_snapshot_preserves_order_and_is_detached() {
        let list = SchedulerListenerList::new();
        let first = recorder();
        let second = recorder();
        list.add(Arc::clone(&first));
        list.add(Arc::clone(&second));

        let mut snapshot = list.listeners();
        assert!(Arc::ptr_eq(&snapshot[0], &first));
        assert!(Arc::ptr_eq(&snapshot[1], &second));

        snapshot.clear();
        assert_eq!(list.len(), 2);

        list.clear();
        assert!(list.is_empty());
    }

    proptest! {
        /// Each remove takes away exactly one of the duplicates
        #[test]
        fn property_remove_takes_one_occurrence(adds in 1usize..8, removes in 0usize..8) {
            let list = SchedulerListenerList::new();
            let listener = recorder();
            for _ in 0..adds {
                list.add(Arc::clone(&listener));
            }

            let mut removed = 0;
            for _ in 0..removes {
                if list.remove(&listener) {
                    removed += 1;
                }
            }

            prop_assert_eq!(removed, removes.min(adds));
            prop_assert_eq!(list.len(), adds - removes.min(adds));
        }
    }
}
