//! Process configuration, read once at startup from the environment.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "feed_api=debug,feed_db=debug,tower_http=debug";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines for local development.
    Pretty,
    /// One JSON object per event, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Everything the feed server needs to boot.
///
/// | Env Var                | Default                    |
/// |------------------------|----------------------------|
/// | `DATABASE_URL`         | required                   |
/// | `DB_MAX_CONNECTIONS`   | `20`                       |
/// | `HOST`                 | `0.0.0.0`                  |
/// | `PORT`                 | `3000`                     |
/// | `CORS_ORIGINS`         | `http://localhost:5173`    |
/// | `REQUEST_TIMEOUT_SECS` | `30`                       |
/// | `LOG_FORMAT`           | `pretty` (`json`)          |
///
/// Token settings are read by [`JwtConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Browser origins allowed to call the API.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Panics
    ///
    /// Panics when `DATABASE_URL` is missing or any value fails to parse, so
    /// a misconfigured deployment never starts serving.
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in the environment");

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env("PORT", 3000),
            database_url,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 20),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5173")),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 30),
            log_format: parse_env("LOG_FORMAT", LogFormat::Pretty),
            jwt: JwtConfig::from_env(),
        }
    }

    /// The address the listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
