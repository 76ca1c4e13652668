//! Process Configuration
//!
//! Settings are read from the environment once at startup and are immutable
//! afterwards. Only the realtime API credential is required; everything else
//! has a sensible local-dev default.

use std::env;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4o-realtime-preview-2024-10-01";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_TOKEN_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Immutable process configuration
#[derive(Debug, Clone)]
pub struct Settings {
    /// Server-side credential for the realtime token exchange
    pub openai_api_key: String,

    /// Realtime model identifier
    pub openai_model: String,

    /// Origins allowed by the CORS layer; `*` means permissive
    pub cors_origins: Vec<String>,

    /// Listen address for the HTTP server
    pub bind_addr: String,

    /// Timeout for the outbound token exchange
    pub token_timeout_secs: u64,
}

impl Settings {
    /// Loads settings from the environment.
    ///
    /// Fails hard when `OPENAI_API_KEY` is unset; the token exchange cannot
    /// work without it and there is no point starting.
    pub fn from_env() -> Result<Self, ConfigError> {
        let openai_api_key =
            env::var("OPENAI_API_KEY").map_err(|_| ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let token_timeout_secs = match env::var("TOKEN_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "TOKEN_TIMEOUT_SECS",
                value: raw,
            })?,
            Err(_) => DEFAULT_TOKEN_TIMEOUT_SECS,
        };

        Ok(Self {
            openai_api_key,
            openai_model,
            cors_origins,
            bind_addr,
            token_timeout_secs,
        })
    }

    /// Convenience constructor for tests.
    pub fn for_tests() -> Self {
        Self {
            openai_api_key: "test-key".to_string(),
            openai_model: DEFAULT_MODEL.to_string(),
            cors_origins: vec![DEFAULT_CORS_ORIGINS.to_string()],
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            token_timeout_secs: DEFAULT_TOKEN_TIMEOUT_SECS,
        }
    }
}
