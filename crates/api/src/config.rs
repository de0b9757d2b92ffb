use crate::auth::jwt::JwtConfig;
use crate::geocoding::GeocoderConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except the JWT
/// secret.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Time allowed for background tasks to stop after shutdown (default: `10`).
    pub shutdown_timeout_secs: u64,
    /// How often the pending-delete sweeper runs (default: `300`).
    pub object_sweep_interval_secs: u64,
    /// JWT signing secret and token lifetime.
    pub jwt: JwtConfig,
    /// Reverse geocoding service settings.
    pub geocoder: GeocoderConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                  |
    /// |------------------------------|--------------------------|
    /// | `HOST`                       | `0.0.0.0`                |
    /// | `PORT`                       | `3001`                   |
    /// | `CORS_ORIGINS`               | `http://127.0.0.1:5500`  |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                     |
    /// | `SHUTDOWN_TIMEOUT_SECS`      | `10`                     |
    /// | `OBJECT_SWEEP_INTERVAL_SECS` | `300`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://127.0.0.1:5500".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let object_sweep_interval_secs: u64 = std::env::var("OBJECT_SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("OBJECT_SWEEP_INTERVAL_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            object_sweep_interval_secs,
            jwt: JwtConfig::from_env(),
            geocoder: GeocoderConfig::from_env(),
        }
    }
}
