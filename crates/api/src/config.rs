use axum::http::HeaderValue;

/// Origin of the Vite dev server, always part of the allow-list.
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:5173";

/// Deployment mode, controls whether error responses carry `detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Postgres connection string (required).
    pub database_url: String,
    /// Origins allowed to make cross-origin requests.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub environment: Environment,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | required                   |
    /// | `FRONTEND_URL`         | unset                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_ENV`              | `development`              |
    ///
    /// The allow-list is `FRONTEND_URL` (if set) followed by every entry of
    /// the comma-separated `CORS_ORIGINS`; the local dev origin is always
    /// included.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_var(&lookup, "PORT", "3000", "u16")?;

        let database_url = lookup("DATABASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30", "u64")?;

        let mut origins: Vec<String> = Vec::new();
        if let Some(frontend) = lookup("FRONTEND_URL") {
            origins.push(frontend.trim().to_string());
        }
        origins.extend(
            lookup("CORS_ORIGINS")
                .unwrap_or_else(|| LOCAL_DEV_ORIGIN.into())
                .split(',')
                .map(|s| s.trim().to_string()),
        );
        origins.push(LOCAL_DEV_ORIGIN.to_string());

        let mut cors_origins: Vec<HeaderValue> = Vec::new();
        for origin in origins.into_iter().filter(|o| !o.is_empty()) {
            let origin = origin.trim_end_matches('/').to_string();
            // A wildcard would defeat the allow-list.
            if origin == "*" {
                return Err(ConfigError::InvalidOrigin(origin));
            }
            let value = HeaderValue::from_str(&origin)
                .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))?;
            if !cors_origins.contains(&value) {
                cors_origins.push(value);
            }
        }

        let environment = lookup("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Development);

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            environment,
        })
    }

    /// Whether error responses may include the underlying error message.
    pub fn expose_error_detail(&self) -> bool {
        self.environment != Environment::Production
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}
