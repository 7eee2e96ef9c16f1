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
    /// SQLite database URL (default: `sqlite://coop.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Login session settings.
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | `sqlite://coop.db`         |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// Session settings are read by [`SessionConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://coop.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            session: SessionConfig::from_env(),
        }
    }
}

/// Default session lifetime in hours.
const DEFAULT_SESSION_TTL_HOURS: i64 = 12;

/// Longest accepted session lifetime: one year.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// Configuration for server-side login sessions.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Hours a session stays valid after login.
    pub ttl_hours: i64,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `SESSION_TTL_HOURS`     | `12`    |
    /// | `SESSION_COOKIE_SECURE` | `false` |
    pub fn from_env() -> Self {
        let ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");

        let cookie_secure: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be true or false");

        Self::new(ttl_hours, cookie_secure)
    }

    /// Build a session configuration, panicking on a lifetime outside
    /// `1..=MAX_SESSION_TTL_HOURS`.
    pub fn new(ttl_hours: i64, cookie_secure: bool) -> Self {
        assert!(ttl_hours > 0, "SESSION_TTL_HOURS must be positive");
        assert!(
            ttl_hours <= MAX_SESSION_TTL_HOURS,
            "SESSION_TTL_HOURS must be at most {MAX_SESSION_TTL_HOURS}"
        );

        Self {
            ttl_hours,
            cookie_secure,
        }
    }

    /// Session lifetime in seconds, used as the cookie `Max-Age`.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_hours * 3600
    }
}
