//! Serena AI Med core library
//!
//! Simulated bedside vitals, a canned medical knowledge responder and an
//! append-only audit trail, wired together behind a command router.

pub mod api;
pub mod audit;
pub mod core;
pub mod error;
pub mod models;
pub mod ui;

pub use error::{Result, SerenaError};

/// Application configuration
pub mod config {
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Config {
        pub simulator: SimulatorConfig,
        #[serde(default)]
        pub audit: AuditConfig,
        pub logging: LoggingConfig,
    }

    /// Longest allowed gap between automatic refreshes: one day.
    pub const MAX_TICK_INTERVAL_SECS: u64 = 24 * 60 * 60;

    #[derive(Debug, Clone, Deserialize)]
    pub struct SimulatorConfig {
        pub tick_interval_secs: u64,
        pub seed: Option<u64>,
    }

    impl SimulatorConfig {
        pub fn tick_interval(&self) -> Duration {
            Duration::from_secs(self.tick_interval_secs.max(1))
        }
    }

    impl Config {
        pub fn validate(&self) -> crate::Result<()> {
            if self.simulator.tick_interval_secs > MAX_TICK_INTERVAL_SECS {
                return Err(crate::SerenaError::InvalidSetting {
                    key: "simulator.tick_interval_secs",
                    reason: format!(
                        "{} exceeds the maximum of {} seconds",
                        self.simulator.tick_interval_secs, MAX_TICK_INTERVAL_SECS
                    ),
                });
            }
            Ok(())
        }
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct AuditConfig {
        /// Audit file location; defaults to a file beside the executable.
        pub path: Option<PathBuf>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct LoggingConfig {
        pub level: String,
        pub json: bool,
    }

    /// Load configuration from `<dir>/default`, `<dir>/<SERENA_ENV>` and
    /// `SERENA__*` environment variables, in increasing precedence.
    pub fn load_config(dir: &Path) -> crate::Result<Config> {
        let env = std::env::var("SERENA_ENV").unwrap_or_else(|_| "development".into());

        let settings = config::Config::builder()
            // Start with built-in defaults
            .set_default("simulator.tick_interval_secs", 60_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(config::File::from(dir.join("default")).required(false))
            // Override with environment-specific settings
            .add_source(config::File::from(dir.join(&env)).required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("SERENA").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::fs;

        #[test]
        fn defaults_apply_without_files() {
            let dir = tempfile::tempdir().unwrap();
            let config = load_config(dir.path()).unwrap();

            assert_eq!(config.simulator.tick_interval(), Duration::from_secs(60));
            assert_eq!(config.logging.level, "info");
            assert!(config.audit.path.is_none());
        }

        #[test]
        fn default_file_overrides_builtins() {
            let dir = tempfile::tempdir().unwrap();
            fs::write(
                dir.path().join("default.toml"),
                "[simulator]\ntick_interval_secs = 5\nseed = 9\n\n[audit]\npath = \"/tmp/serena-audit.txt\"\n",
            )
            .unwrap();

            let config = load_config(dir.path()).unwrap();
            assert_eq!(config.simulator.tick_interval_secs, 5);
            assert_eq!(config.simulator.seed, Some(9));
            assert_eq!(
                config.audit.path.as_deref(),
                Some(Path::new("/tmp/serena-audit.txt"))
            );
        }

        #[test]
        fn oversized_tick_interval_is_rejected() {
            let dir = tempfile::tempdir().unwrap();
            fs::write(
                dir.path().join("default.toml"),
                "[simulator]\ntick_interval_secs = 9223372036854775807\n",
            )
            .unwrap();

            let err = load_config(dir.path()).unwrap_err();
            assert!(matches!(err, crate::SerenaError::InvalidSetting { .. }));
        }

        #[test]
        fn validate_accepts_one_day_and_rejects_more() {
            let dir = tempfile::tempdir().unwrap();
            let mut config = load_config(dir.path()).unwrap();

            config.simulator.tick_interval_secs = MAX_TICK_INTERVAL_SECS;
            assert!(config.validate().is_ok());

            config.simulator.tick_interval_secs = u64::MAX;
            assert!(config.validate().is_err());
        }
    }
}
