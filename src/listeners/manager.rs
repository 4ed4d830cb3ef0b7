use std::sync::Arc;

use crate::config::settings::ListenersConfig;
use crate::listeners::registry::{JobListenerRegistry, TriggerListenerRegistry};
use crate::listeners::scheduler::SchedulerListenerList;

struct Registries {
    jobs: JobListenerRegistry,
    triggers: TriggerListenerRegistry,
    scheduler: SchedulerListenerList,
}

/// Owner of the job, trigger and scheduler listener registries of one
/// scheduler instance. Clones share the same registries.
#[derive(Clone)]
pub struct ListenerManager {
    inner: Arc<Registries>,
}

impl ListenerManager {
    pub fn new() -> Self {
        Self::from_config(&ListenersConfig::default())
    }

    pub fn from_config(config: &ListenersConfig) -> Self {
        let capacity = config.initial_capacity;
        let prune = config.prune_matchers_on_unregister;

        tracing::debug!(capacity, prune, "Creating listener registries");

        Self {
            inner: Arc::new(Registries {
                jobs: JobListenerRegistry::with_capacity(capacity)
                    .prune_matchers_on_unregister(prune),
                triggers: TriggerListenerRegistry::with_capacity(capacity)
                    .prune_matchers_on_unregister(prune),
                scheduler: SchedulerListenerList::with_capacity(capacity),
            }),
        }
    }

    pub fn job_listeners(&self) -> &JobListenerRegistry {
        &self.inner.jobs
    }

    pub fn trigger_listeners(&self) -> &TriggerListenerRegistry {
        &self.inner.triggers
    }

    pub fn scheduler_listeners(&self) -> &SchedulerListenerList {
        &self.inner.scheduler
    }

    /// Drop every registered listener and matcher list
    pub fn clear(&self) {
        self.inner.jobs.clear();
        self.inner.triggers.clear();
        self.inner.scheduler.clear();
    }
}

impl Default for ListenerManager {
    fn default() -> Self {
        Self::new()
    }
}
