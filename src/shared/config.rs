use anyhow::{bail, Context};
use std::env;

/// Runtime configuration read from the process environment (after dotenv loading).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub run_migrations: bool,
    pub argon2: Argon2Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` first, then fall back to `.env`.
    pub fn load_dotenv() {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests never touch the process env.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .context("DATABASE_URL is not set")?;

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", &lookup, 8080u16)?;

        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", &lookup, 20u32)?;
        let db_min_connections = parse_or("DB_MIN_CONNECTIONS", &lookup, 2u32)?;
        if db_min_connections > db_max_connections {
            bail!("DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS");
        }

        let run_migrations = parse_or("RUN_MIGRATIONS", &lookup, true)?;

        let defaults = Argon2Config::default();
        let argon2 = Argon2Config {
            memory_kib: parse_or("ARGON2_MEMORY_KIB", &lookup, defaults.memory_kib)?,
            iterations: parse_or("ARGON2_ITERATIONS", &lookup, defaults.iterations)?,
            parallelism: parse_or("ARGON2_PARALLELISM", &lookup, defaults.parallelism)?,
        };

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
            run_migrations,
            argon2,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {} value '{}': {}", key, raw, e)),
    }
}
