//! Configuration management for the books server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    /// libpq-style mode: disable, allow, prefer, require, verify-ca, verify-full
    pub sslmode: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration, resolving the plain `DB_*`/`PORT` overrides through `lookup`.
    ///
    /// Empty values count as unset, so `PORT=""` keeps the default port.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let run_mode = var("RUN_MODE").unwrap_or_else(|| "development".into());

        let config = Config::builder()
            // Built-in defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432_i64)?
            .set_default("database.user", "postgres")?
            .set_default("database.password", "")?
            .set_default("database.dbname", "postgres")?
            .set_default("database.sslmode", "prefer")?
            .set_default("database.max_connections", 10_i64)?
            .set_default("database.min_connections", 1_i64)?
            .set_default("database.acquire_timeout_secs", 5_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. BOOKS__DATABASE__MAX_CONNECTIONS=20
            .add_source(
                Environment::with_prefix("BOOKS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.host", var("DB_HOST"))?
            .set_override_option("database.port", var("DB_PORT"))?
            .set_override_option("database.user", var("DB_USER"))?
            .set_override_option("database.password", var("DB_PASS"))?
            .set_override_option("database.dbname", var("DB_DBNAME"))?
            .set_override_option("database.sslmode", var("DB_SSLMODE"))?
            .set_override_option("server.port", var("PORT"))?
            .build()?;

        config.try_deserialize()
    }
}

impl DatabaseConfig {
    /// Build driver connection options from the configured fields
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let ssl_mode = match self.sslmode.trim() {
            "" => PgSslMode::Prefer,
            mode => mode.parse::<PgSslMode>()?,
        };

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .ssl_mode(ssl_mode);

        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        if !self.dbname.is_empty() {
            options = options.database(&self.dbname);
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_plain_variables_override_database_settings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "books"),
            ("DB_PASS", "secret"),
            ("DB_DBNAME", "library"),
            ("DB_SSLMODE", "disable"),
            ("PORT", "8081"),
        ]))
        .unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.user, "books");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.dbname, "library");
        assert_eq!(config.database.sslmode, "disable");
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_port_defaults_to_3000() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_empty_port_is_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "")])).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).is_err());
    }

    fn default_database() -> DatabaseConfig {
        AppConfig::from_lookup(lookup_from(&[])).unwrap().database
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.sslmode, "prefer");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_connect_options_accepts_known_sslmodes() {
        for mode in ["", "disable", "prefer", "require", "verify-full"] {
            let config = DatabaseConfig {
                sslmode: mode.to_string(),
                ..default_database()
            };
            assert!(config.connect_options().is_ok(), "sslmode {:?}", mode);
        }
    }

    #[test]
    fn test_connect_options_rejects_unknown_sslmode() {
        let config = DatabaseConfig {
            sslmode: "sometimes".to_string(),
            ..default_database()
        };
        assert!(config.connect_options().is_err());
    }
}
