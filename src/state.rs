//! Application state owning the listener registries of one scheduler.
//!
//! Each scheduler instance builds its own `AppState`; nothing here is a
//! process-wide singleton, so several schedulers can share a process.

use crate::config::{ConfigLoader, Settings};
use crate::error::AppResult;
use crate::listeners::ListenerManager;
use crate::logger::init_logger;

/// Loaded settings plus the listener registries built from them.
///
/// Cloning is cheap; clones share the same registries.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub listeners: ListenerManager,
}

impl AppState {
    /// Build state from already loaded settings
    ///
    /// # Errors
    /// Returns a configuration error when `settings` fail validation.
    pub fn from_settings(settings: Settings) -> AppResult<Self> {
        settings.validate()?;
        let listeners = ListenerManager::from_config(&settings.listeners);
        Ok(Self {
            settings,
            listeners,
        })
    }

    /// Load configuration, install the global logger and build the registries.
    ///
    /// # Example
    /// ```ignore
    /// let state = AppState::bootstrap(&ConfigLoader::new()?)?;
    /// state.listeners.job_listeners().register(listener)?;
    /// ```
    pub fn bootstrap(loader: &ConfigLoader) -> AppResult<Self> {
        let settings = loader.load()?;
        init_logger(settings.logger.clone().into_logger_config()?)?;

        tracing::info!(
            app = %settings.application.name,
            version = %settings.application.version,
            environment = %loader.environment(),
            "Listener registries ready"
        );
        Self::from_settings(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListenersConfig;
    use crate::error::AppError;
    use crate::listeners::SchedulerListener;
    use std::sync::Arc;

    struct Heartbeat;

    impl SchedulerListener for Heartbeat {}

    #[test]
    fn test_from_settings_builds_registries() {
        let state = AppState::from_settings(Settings::default()).unwrap();
        state.listeners.scheduler_listeners().add(Arc::new(Heartbeat));

        let clone = state.clone();
        assert_eq!(clone.listeners.scheduler_listeners().len(), 1);
    }

    #[test]
    fn test_from_settings_rejects_invalid() {
        let settings = Settings {
            listeners: ListenersConfig {
                initial_capacity: 0,
                ..ListenersConfig::default()
            },
            ..Settings::default()
        };

        assert!(matches!(
            AppState::from_settings(settings),
            Err(AppError::Configuration { .. })
        ));
    }
}
