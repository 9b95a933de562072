/**
 * Server Configuration
 *
 * `ServerConfig` is built once at startup from environment variables (after
 * `.env` has been loaded) and then shared read-only by every component.
 * Tests build it directly through `ServerConfig::builder`.
 *
 * # Keys
 *
 * | Key | Default |
 * |---|---|
 * | `SERVER_HOST` | `0.0.0.0` |
 * | `SERVER_PORT` | `8081` |
 * | `DATABASE_URL` | `sqlite://bloodconnect.db` |
 * | `JWT_SECRET` | required |
 * | `JWT_EXPIRATION_HOURS` | `24` |
 * | `BCRYPT_COST` | `10` (4 to 31) |
 * | `STORE_TIMEOUT_MS` | `5000` |
 * | `LEGACY_PLAINTEXT_CREDENTIALS` | `false` |
 * | `CORS_ALLOWED_ORIGIN` | `http://localhost:3000`, `*` for any |
 * | `BOOTSTRAP_ADMIN_EMAIL` / `_PASSWORD` / `_NAME` / `_DOB` | unset |
 *
 * A value that does not parse is a startup error naming the key.
 */

use axum::http::HeaderValue;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::backend::auth::authenticator::Registration;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://bloodconnect.db";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// One year
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 366;
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl Display) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Allowed cross-origin caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

impl CorsOrigin {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        if value == "*" {
            return Ok(CorsOrigin::Any);
        }
        HeaderValue::from_str(value)
            .map(CorsOrigin::Exact)
            .map_err(|e| ConfigError::invalid("CORS_ALLOWED_ORIGIN", value, e))
    }
}

/// Admin account ensured at startup
#[derive(Clone, PartialEq, Eq)]
pub struct BootstrapAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<&BootstrapAdmin> for Registration {
    fn from(admin: &BootstrapAdmin) -> Self {
        Registration {
            name: admin.name.clone(),
            email: admin.email.clone(),
            password: admin.password.clone(),
            date_of_birth: admin.date_of_birth.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl: chrono::Duration,
    pub bcrypt_cost: u32,
    pub store_timeout: Duration,
    pub legacy_plaintext_credentials: bool,
    pub cors_origin: CorsOrigin,
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl ServerConfig {
    pub fn builder(jwt_secret: impl Into<String>) -> ServerConfigBuilder {
        ServerConfigBuilder::new(jwt_secret.into())
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, one key at a time
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let host = match get("SERVER_HOST") {
            Some(value) => parse_value::<IpAddr>("SERVER_HOST", &value)?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match get("SERVER_PORT") {
            Some(value) => parse_value::<u16>("SERVER_PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let mut builder = ServerConfigBuilder::new(jwt_secret).bind_addr(SocketAddr::new(host, port));

        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(value) = get("JWT_EXPIRATION_HOURS") {
            let hours = parse_value::<i64>("JWT_EXPIRATION_HOURS", &value)?;
            if !(1..=MAX_TOKEN_TTL_HOURS).contains(&hours) {
                return Err(ConfigError::invalid(
                    "JWT_EXPIRATION_HOURS",
                    &value,
                    format!("must be between 1 and {}", MAX_TOKEN_TTL_HOURS),
                ));
            }
            let ttl = chrono::Duration::try_hours(hours)
                .ok_or_else(|| ConfigError::invalid("JWT_EXPIRATION_HOURS", &value, "out of range"))?;
            builder = builder.token_ttl(ttl);
        }
        if let Some(value) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value::<u32>("BCRYPT_COST", &value)?);
        }
        if let Some(value) = get("STORE_TIMEOUT_MS") {
            let millis = parse_value::<u64>("STORE_TIMEOUT_MS", &value)?;
            builder = builder.store_timeout(Duration::from_millis(millis));
        }
        if let Some(value) = get("LEGACY_PLAINTEXT_CREDENTIALS") {
            builder = builder.legacy_plaintext_credentials(parse_flag("LEGACY_PLAINTEXT_CREDENTIALS", &value)?);
        }
        if let Some(value) = get("CORS_ALLOWED_ORIGIN") {
            builder = builder.cors_origin(CorsOrigin::parse(&value)?);
        }

        match (get("BOOTSTRAP_ADMIN_EMAIL"), get("BOOTSTRAP_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => {
                builder = builder.bootstrap_admin(BootstrapAdmin {
                    name: get("BOOTSTRAP_ADMIN_NAME").unwrap_or_else(|| "Administrator".to_string()),
                    email,
                    password,
                    date_of_birth: get("BOOTSTRAP_ADMIN_DOB").unwrap_or_else(|| "1970-01-01".to_string()),
                });
            }
            (Some(_), None) => return Err(ConfigError::MissingValue("BOOTSTRAP_ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::MissingValue("BOOTSTRAP_ADMIN_EMAIL")),
            (None, None) => {}
        }

        builder.build()
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url)
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("store_timeout", &self.store_timeout)
            .field("legacy_plaintext_credentials", &self.legacy_plaintext_credentials)
            .field("cors_origin", &self.cors_origin)
            .field("bootstrap_admin", &self.bootstrap_admin)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    fn new(jwt_secret: String) -> Self {
        Self {
            config: ServerConfig {
                bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
                database_url: DEFAULT_DATABASE_URL.to_string(),
                jwt_secret,
                token_ttl: chrono::Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
                bcrypt_cost: DEFAULT_BCRYPT_COST,
                store_timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
                legacy_plaintext_credentials: false,
                cors_origin: CorsOrigin::Exact(HeaderValue::from_static(DEFAULT_CORS_ORIGIN)),
                bootstrap_admin: None,
            },
        }
    }

    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.config.bind_addr = addr;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    pub fn token_ttl(mut self, ttl: chrono::Duration) -> Self {
        self.config.token_ttl = ttl;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    pub fn store_timeout(mut self, timeout: Duration) -> Self {
        self.config.store_timeout = timeout;
        self
    }

    pub fn legacy_plaintext_credentials(mut self, enabled: bool) -> Self {
        self.config.legacy_plaintext_credentials = enabled;
        self
    }

    pub fn cors_origin(mut self, origin: CorsOrigin) -> Self {
        self.config.cors_origin = origin;
        self
    }

    pub fn bootstrap_admin(mut self, admin: BootstrapAdmin) -> Self {
        self.config.bootstrap_admin = Some(admin);
        self
    }

    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = self.config;
        if config.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(4..=31).contains(&config.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                &config.bcrypt_cost.to_string(),
                "must be between 4 and 31",
            ));
        }
        let max_ttl = chrono::Duration::hours(MAX_TOKEN_TTL_HOURS);
        if config.token_ttl <= chrono::Duration::zero() || config.token_ttl > max_ttl {
            return Err(ConfigError::invalid(
                "JWT_EXPIRATION_HOURS",
                &config.token_ttl.num_hours().to_string(),
                format!("must be between 1 and {}", MAX_TOKEN_TTL_HOURS),
            ));
        }
        if config.store_timeout.is_zero() {
            return Err(ConfigError::invalid("STORE_TIMEOUT_MS", "0", "must be positive"));
        }
        Ok(config)
    }
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::invalid(key, value, e))
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, value, "expected true or false")),
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open the SQLite pool for `url`, creating the file if needed
///
/// An in-memory database lives only as long as its connection, so it gets a
/// single connection that is never recycled.
pub async fn connect_database(url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let mut options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_memory_url(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options = options.journal_mode(SqliteJournalMode::Wal);
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}
