use std::str::FromStr;
use std::time::Duration;

/// Which record store backs the diary service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// PostgreSQL via `sitediary_db::PgRecordStore`.
    Postgres(DatabaseConfig),
    /// Process-local store; contents are lost on restart.
    Memory,
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Load database settings from the environment.
    ///
    /// | Env Var                   | Default    |
    /// |---------------------------|------------|
    /// | `DATABASE_URL`            | (required) |
    /// | `DB_MAX_CONNECTIONS`      | `10`       |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`        |
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        Self {
            url,
            max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            acquire_timeout_secs: env_or("DB_ACQUIRE_TIMEOUT_SECS", 5),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Record store backend.
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DIARY_STORE`          | `postgres`                 |
    ///
    /// Panics on unparsable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let store = match env_or::<StoreBackend>("DIARY_STORE", StoreBackend::Postgres) {
            StoreBackend::Postgres => StoreConfig::Postgres(DatabaseConfig::from_env()),
            StoreBackend::Memory => StoreConfig::Memory,
        };

        Self {
            host,
            port: env_or("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            store,
        }
    }
}

/// Value of `DIARY_STORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!(
                "unknown store backend '{other}'. Must be one of: postgres, memory"
            )),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Read and parse `key`, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_split_and_trimmed() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test ,,"),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn store_backend_parses_case_insensitively() {
        assert_eq!("Memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!("postgres".parse::<StoreBackend>(), Ok(StoreBackend::Postgres));
        assert_eq!("postgresql".parse::<StoreBackend>(), Ok(StoreBackend::Postgres));
    }

    #[test]
    fn unknown_store_backend_rejected() {
        let err = "mongo".parse::<StoreBackend>().unwrap_err();
        assert!(err.contains("unknown store backend"));
    }
}
