//! Process settings read from the environment (and `.env` via dotenvy in `main`).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// MySQL host, from `HOST`.
    pub db_host: String,
    pub db_port: u16,
    /// From `USER`.
    pub db_user: String,
    /// From `PASSWORD`; empty when unset.
    pub db_password: String,
    /// From `DATABASE`.
    pub db_name: String,
    pub db_max_connections: u32,
    /// Listening port, from `PORT`.
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        Ok(Self {
            db_host: lookup("HOST").filter(|v| !v.is_empty()).unwrap_or_else(|| "localhost".into()),
            db_port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            db_user: required("USER")?,
            db_password: lookup("PASSWORD").unwrap_or_default(),
            db_name: required("DATABASE")?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            body_limit_bytes: parse_or(&lookup, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
