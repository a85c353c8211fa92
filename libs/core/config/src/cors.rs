use crate::{ConfigError, Environment, FromEnv};
use std::env;

/// Cross-origin policy for the HTTP API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsConfig {
    /// Any origin may call the API. Only used in development.
    Permissive,
    /// Only the listed origins may call the API.
    AllowList(Vec<String>),
    /// No cross-origin access at all.
    Disabled,
}

impl CorsConfig {
    /// Parses a comma-separated origin list, dropping blanks.
    pub fn from_origins(raw: &str) -> Result<Self, ConfigError> {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "origin list cannot be empty".to_string(),
            });
        }

        Ok(Self::AllowList(origins))
    }
}

impl FromEnv for CorsConfig {
    /// `CORS_ALLOWED_ORIGIN` holds comma-separated origins. When unset the
    /// policy is permissive in development and disabled in production.
    fn from_env() -> Result<Self, ConfigError> {
        match env::var("CORS_ALLOWED_ORIGIN") {
            Ok(raw) => Self::from_origins(&raw),
            Err(_) if Environment::from_env().is_production() => Ok(Self::Disabled),
            Err(_) => Ok(Self::Permissive),
        }
    }
}
