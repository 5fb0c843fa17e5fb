//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CHINOOK_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CHINOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_only_url_is_given() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                "[database]\nurl = \"postgres://localhost/chinook\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let app: AppConfig = config.try_deserialize().unwrap();
        assert_eq!(app.database.url, "postgres://localhost/chinook");
        assert_eq!(app.database.max_connections, 20);
        assert_eq!(app.logging.level, "info");
    }

    #[test]
    fn test_missing_database_section_is_an_error() {
        let config = config::Config::builder()
            .add_source(config::File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap();

        assert!(config.try_deserialize::<AppConfig>().is_err());
    }
}
