use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::view::ResponseOrdering;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub generate_url: String,
    pub request_timeout: Duration,
    pub session_header: String,
    pub sign_in_url: String,
    pub sign_out_url: String,
    pub response_ordering: ResponseOrdering,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, applying defaults for
    /// missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get("HOST", "127.0.0.1");
        let port = get("PORT", "8080");
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::ConfigError(format!("Invalid PORT: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::ConfigError(format!("Invalid HOST address: {}", e)))?;

        let timeout_secs = get("REQUEST_TIMEOUT_SECS", "60")
            .parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("Invalid REQUEST_TIMEOUT_SECS: {}", e)))?;
        if timeout_secs == 0 {
            return Err(AppError::ConfigError(
                "REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        let response_ordering = get("RESPONSE_ORDERING", "last-write-wins")
            .parse::<ResponseOrdering>()
            .map_err(|e| AppError::ConfigError(format!("Invalid RESPONSE_ORDERING: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            generate_url: get("GENERATE_URL", "http://127.0.0.1:3000/api/generate"),
            request_timeout: Duration::from_secs(timeout_secs),
            session_header: get("SESSION_HEADER", "x-forwarded-user").to_ascii_lowercase(),
            sign_in_url: get("SIGN_IN_URL", "/api/auth/signin/google"),
            sign_out_url: get("SIGN_OUT_URL", "/api/auth/signout"),
            response_ordering,
        })
    }
}
