/*
 * Responsibility
 * - Load settings from the environment (DATABASE_URL, identity provider, CORS, timeouts)
 * - Validate them up front (a missing required key aborts startup)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for local verification of session JWTs.
#[derive(Debug, Clone)]
pub struct SessionJwtConfig {
    pub public_key_pem: String,
    pub issuer: Option<String>,
    pub leeway_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub database_url: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub run_migrations: bool,

    pub identity_project_id: String,
    pub identity_provider_url: String,
    pub identity_provider_timeout: Duration,
    pub session_jwt: Option<SessionJwtConfig>,
    // None: ownerID is the authenticated subject
    pub owner_id_claim: Option<String>,

    pub cors_allowed_origin_prefixes: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be exercised without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = parse_or(&lookup, "PORT", 8080)?;
        let addr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let database_url = non_empty("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?;
        let db_acquire_timeout =
            Duration::from_millis(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_MS", 5_000)?);
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", true)?;

        let identity_project_id = non_empty("IDENTITY_PROJECT_ID")
            .or_else(|| non_empty("DESCOPE_PROJECT_ID"))
            .ok_or(ConfigError::Missing("IDENTITY_PROJECT_ID"))?;

        let identity_provider_url = non_empty("IDENTITY_PROVIDER_URL")
            .unwrap_or_else(|| "https://api.descope.com".to_string());
        url::Url::parse(&identity_provider_url)
            .map_err(|_| ConfigError::Invalid("IDENTITY_PROVIDER_URL"))?;

        let identity_provider_timeout =
            Duration::from_millis(parse_or(&lookup, "IDENTITY_PROVIDER_TIMEOUT_MS", 5_000)?);

        let session_jwt = match non_empty("SESSION_JWT_PUBLIC_KEY_PEM") {
            Some(pem) => Some(SessionJwtConfig {
                public_key_pem: pem.replace("\\n", "\n"),
                issuer: non_empty("SESSION_JWT_ISSUER"),
                leeway_seconds: parse_or(&lookup, "SESSION_JWT_LEEWAY_SECONDS", 60)?,
            }),
            None => None,
        };

        let owner_id_claim = non_empty("OWNER_ID_CLAIM").map(|s| s.trim().to_string());

        let cors_allowed_origin_prefixes = lookup("CORS_ALLOWED_ORIGIN_PREFIXES")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let request_timeout =
            Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECONDS", 30)?);
        // a slow provider must fail as an auth error before the request deadline fires
        if identity_provider_timeout >= request_timeout {
            return Err(ConfigError::Invalid("IDENTITY_PROVIDER_TIMEOUT_MS"));
        }

        Ok(Self {
            addr,
            app_env,
            database_url,
            db_max_connections,
            db_acquire_timeout,
            run_migrations,
            identity_project_id,
            identity_provider_url,
            identity_provider_timeout,
            session_jwt,
            owner_id_claim,
            cors_allowed_origin_prefixes,
            request_timeout,
        })
    }
}

// Absent keys fall back to the default; present but unparsable keys are rejected.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::Invalid(key))
        }
        _ => Ok(default),
    }
}
