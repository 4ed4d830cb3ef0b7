//! Configuration loader for fusion-listeners
//!
//! `ConfigLoader` merges configuration files and environment variables into
//! [`Settings`], later sources overriding earlier ones.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "FUSION_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "FUSION_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "FUSION";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Where configuration files are read from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    /// `default.toml`, `{environment}.toml` and `local.toml` from a directory
    Layered(PathBuf),
    /// A single file, no layering
    Single(PathBuf),
}

/// Configuration loader that handles layered configuration loading
///
/// Sources in order of priority (lowest first):
/// 1. `default.toml` (required)
/// 2. `{environment}.toml` (optional)
/// 3. `local.toml` (optional)
/// 4. `FUSION_*` environment variables
#[derive(Debug)]
pub struct ConfigLoader {
    source: Source,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `FUSION_CONFIG_DIR`, `FUSION_CONFIG_FILE` and
    /// `FUSION_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `FUSION_CONFIG_DIR` and `FUSION_CONFIG_FILE` are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok();

        let source = match (config_dir, config_file) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::mutual_exclusivity(
                    "FUSION_CONFIG_DIR and FUSION_CONFIG_FILE cannot both be set. \
                     Use FUSION_CONFIG_DIR for layered configuration or \
                     FUSION_CONFIG_FILE for a single configuration file.",
                ));
            }
            (_, Some(file)) => Source::Single(PathBuf::from(file)),
            (Some(dir), None) => Source::Layered(PathBuf::from(dir)),
            (None, None) => Source::Layered(PathBuf::from(DEFAULT_CONFIG_DIR)),
        };

        Ok(Self {
            source,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Layered loading from `dir` for the given environment
    pub fn from_dir(dir: impl Into<PathBuf>, environment: AppEnvironment) -> Self {
        Self {
            source: Source::Layered(dir.into()),
            environment,
        }
    }

    /// Load a single configuration file
    pub fn from_file(file: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Single(file.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load and validate configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, parsing fails or the
    /// resulting settings are invalid.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        tracing::debug!(
            environment = %self.environment,
            source = ?self.source,
            "Loaded configuration"
        );
        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match &self.source {
            Source::Single(file) => Self::add_file_source(builder, file, true)?,
            Source::Layered(dir) => {
                let builder = Self::add_file_source(builder, &dir.join("default.toml"), true)?;
                let env_file = dir.join(format!("{}.toml", self.environment.as_str()));
                let builder = Self::add_file_source(builder, &env_file, false)?;
                Self::add_file_source(builder, &dir.join("local.toml"), false)?
            }
        };

        // FUSION_LISTENERS__INITIAL_CAPACITY -> listeners.initial_capacity
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests touching process environment variables run one at a time
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Restores touched environment variables on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    const DEFAULT_TOML: &str = r#"
[application]
name = "test-app"
version = "1.0.0"

[logger]
level = "info"

[logger.console]
enabled = true
colored = false

[listeners]
initial_capacity = 16
prune_matchers_on_unregister = false
"#;

    #[test]
    fn test_new_defaults_to_config_dir() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);
        env.remove(AppEnvironment::ENV_VAR);

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.source, Source::Layered(PathBuf::from("config")));
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_new_mutual_exclusivity_error() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(CONFIG_FILE_ENV, "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains("FUSION_CONFIG_DIR"));
                assert!(msg.contains("FUSION_CONFIG_FILE"));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_new_with_config_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.remove(CONFIG_DIR_ENV);
        env.set(CONFIG_FILE_ENV, "/path/to/config.toml");

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(
            loader.source,
            Source::Single(PathBuf::from("/path/to/config.toml"))
        );
    }

    #[test]
    fn test_load_missing_default_toml() {
        let temp_dir = setup_config_dir(&[]);
        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Test);

        match loader.load() {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("default.toml")),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_default_toml_only() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Test);

        let settings = loader.load().expect("Should load settings");
        assert_eq!(settings.application.name, "test-app");
        assert_eq!(settings.listeners.initial_capacity, 16);
        assert!(!settings.logger.console.colored);
    }

    #[test]
    fn test_load_layered_precedence() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.remove("FUSION_LISTENERS__INITIAL_CAPACITY");

        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_TOML),
            (
                "production.toml",
                "[listeners]\nprune_matchers_on_unregister = true\ninitial_capacity = 32\n",
            ),
            ("local.toml", "[logger]\nlevel = \"debug\"\n"),
            ("test.toml", "[listeners]\ninitial_capacity = 99\n"),
        ]);
        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Production);

        let settings = loader.load().expect("Should load settings");
        assert!(settings.listeners.prune_matchers_on_unregister);
        assert_eq!(settings.listeners.initial_capacity, 32);
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_load_env_var_override() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.set("FUSION_LISTENERS__INITIAL_CAPACITY", "64");

        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Test);

        let settings = loader.load().expect("Should load settings");
        assert_eq!(settings.listeners.initial_capacity, 64);
    }

    #[test]
    fn test_load_single_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let temp_dir = setup_config_dir(&[("custom.toml", DEFAULT_TOML)]);
        let loader = ConfigLoader::from_file(temp_dir.path().join("custom.toml"));

        let settings = loader.load().expect("Should load settings");
        assert_eq!(settings.listeners.initial_capacity, 16);
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let temp_dir =
            setup_config_dir(&[("default.toml", "[listeners]\ninitial_capacity = 0\n")]);
        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Test);

        assert!(matches!(
            loader.load(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
