use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub database_max_connections: u32,

    // Session cookie signing
    pub session_secret: String,
    pub session_ttl: i64, // seconds

    pub api_prefix: String,
    pub seed_users: bool,

    pub log_dir: String,
    pub log_level: tracing::Level,
}

/// Reads `key`, falling back to `default` when unset.
fn var_or<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .with_context(|| format!("{key} has an invalid value"))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let session_secret = env::var("SESSION_SECRET").context("SESSION_SECRET must be set")?;
        if session_secret.is_empty() {
            anyhow::bail!("SESSION_SECRET must not be empty");
        }

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "127.0.0.1:8080")?,
            database_url: var_or("DATABASE_URL", "sqlite://gift-box.sqlite3")?,
            database_max_connections: var_or("DATABASE_MAX_CONNECTIONS", "5")?,
            session_secret,
            session_ttl: var_or("SESSION_TTL", "86400")?, // default 24 hours
            api_prefix: var_or("API_PREFIX", "/api")?,
            seed_users: var_or("SEED_USERS", "true")?,
            log_dir: var_or("LOG_DIR", "logs")?,
            log_level: var_or("LOG_LEVEL", "debug")?,
        })
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            server_addr: "127.0.0.1:0".to_string(),
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            session_secret: "test-session-secret".to_string(),
            session_ttl: 86_400,
            api_prefix: "/api".to_string(),
            seed_users: false,
            log_dir: "logs".to_string(),
            log_level: tracing::Level::DEBUG,
        }
    }
}
