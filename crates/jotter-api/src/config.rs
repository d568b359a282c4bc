//! Server configuration loaded from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_PATH` | `./notes.db` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//! | `DB_MAX_CONNECTIONS` | `5` |
//! | `DB_BUSY_TIMEOUT_SECS` | `5` |
//! | `REQUEST_BODY_LIMIT_BYTES` | `1048576` |
//! | `LOG_FORMAT` | `text` (`json` also accepted) |
//! | `LOG_FILE` | unset (stdout only) |
//! | `LOG_ANSI` | auto-detected |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use jotter_core::{Error, Result};
use jotter_db::pool::{DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};
use jotter_db::PoolConfig;

pub const DEFAULT_DATABASE_PATH: &str = "./notes.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::Config(format!(
                "LOG_FORMAT must be \"text\" or \"json\", got {:?}",
                other
            ))),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Daily-rotated log file; stdout when unset.
    pub file: Option<PathBuf>,
    /// Force ANSI colors on or off.
    pub ansi: Option<bool>,
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_busy_timeout: Duration,
    pub body_limit_bytes: usize,
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_max_connections: DEFAULT_MAX_CONNECTIONS,
            db_busy_timeout: Duration::from_secs(DEFAULT_BUSY_TIMEOUT_SECS),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            log: LogConfig {
                format: LogFormat::Text,
                file: None,
                ansi: None,
            },
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// or `None` when unset.
    ///
    /// Unset or blank variables fall back to defaults; present but
    /// unparseable values are a configuration error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let log = LogConfig {
            format: match get("LOG_FORMAT") {
                Some(v) => v.parse()?,
                None => defaults.log.format,
            },
            file: get("LOG_FILE").map(PathBuf::from),
            ansi: get("LOG_ANSI").map(|v| v == "true" || v == "1"),
        };

        Ok(Self {
            database_path: get("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            db_max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                get("DB_MAX_CONNECTIONS"),
                defaults.db_max_connections,
            )?,
            db_busy_timeout: Duration::from_secs(parse_or(
                "DB_BUSY_TIMEOUT_SECS",
                get("DB_BUSY_TIMEOUT_SECS"),
                defaults.db_busy_timeout.as_secs(),
            )?),
            body_limit_bytes: parse_or(
                "REQUEST_BODY_LIMIT_BYTES",
                get("REQUEST_BODY_LIMIT_BYTES"),
                defaults.body_limit_bytes,
            )?,
            log,
        })
    }

    /// Pool settings derived from this configuration.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new()
            .max_connections(self.db_max_connections)
            .busy_timeout(self.db_busy_timeout)
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("{} must be a number, got {:?}", key, raw))),
    }
}
