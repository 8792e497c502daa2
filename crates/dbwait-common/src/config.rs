//! Connection aliases loaded from environment variables and config files.
//!
//! Supports `.env` files for development and environment variables for production.
//! Config precedence: env vars > config file > `DATABASE_URL` > defaults

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

use crate::error::{CheckError, CheckResult};

/// Alias checked when none is given on the command line.
pub const DEFAULT_ALIAS: &str = "default";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Initialize the global configuration from environment.
///
/// Should be called once at startup. Later calls return the first result.
pub fn init(path: Option<&Path>) -> Result<&'static AppConfig, ConfigError> {
    if let Some(cfg) = CONFIG.get() {
        return Ok(cfg);
    }
    let app_config = load(path)?;
    tracing::debug!(
        aliases = ?app_config.databases.keys().collect::<Vec<_>>(),
        "Configuration loaded"
    );
    Ok(CONFIG.get_or_init(|| app_config))
}

/// Load configuration without touching the global slot.
///
/// An explicit `path` must exist; otherwise `dbwait.toml` is read when present.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let builder = defaults(std::env::var("DATABASE_URL").ok())?;
    let builder = match path {
        Some(path) => builder.add_source(config::File::from(path).required(true)),
        None => builder.add_source(config::File::with_name("dbwait").required(false)),
    };

    builder
        // DBWAIT_DATABASES__DEFAULT__URL, DBWAIT_DATABASES__REPLICA__CONNECT_TIMEOUT_SECS, ...
        .add_source(
            config::Environment::with_prefix("DBWAIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

/// Lowest-precedence layer: `DATABASE_URL` becomes the `default` alias.
fn defaults(database_url: Option<String>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = config::Config::builder();
    match database_url {
        Some(url) => builder.set_default(format!("databases.{DEFAULT_ALIAS}.url"), url),
        None => Ok(builder),
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Connection settings keyed by alias (`default`, `replica`, ...).
    #[serde(default)]
    pub databases: HashMap<String, DatabaseConfig>,
}

impl AppConfig {
    /// Resolve an alias. Aliases are matched case-insensitively since
    /// environment-derived keys arrive lowercased.
    pub fn database(&self, alias: &str) -> CheckResult<&DatabaseConfig> {
        self.databases
            .get(alias)
            .or_else(|| self.databases.get(&alias.to_ascii_lowercase()))
            .ok_or_else(|| CheckError::UnknownAlias {
                alias: alias.to_string(),
            })
    }
}

#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Upper bound on a single connection attempt. Must be at least 1.
    #[serde(default = "default_connect_timeout", deserialize_with = "non_zero_secs")]
    pub connect_timeout_secs: u64,
}

fn default_connect_timeout() -> u64 {
    5
}

// A zero timeout expires before the connect future is ever polled to completion.
fn non_zero_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let secs = u64::deserialize(deserializer)?;
    if secs == 0 {
        return Err(serde::de::Error::custom("connect_timeout_secs must be at least 1"));
    }
    Ok(secs)
}

// The URL usually embeds a password.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
