//! Deployment configuration.
//!
//! Values come from, in increasing precedence: built-in development
//! defaults, an optional TOML file, and `CIVILS_*` environment variables.

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECONDS, header, origin};
use crate::cors::Cors;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use crate::policy::{CorsPolicy, ValidationError};
use crate::security::{AuthorizationRule, SecurityPolicy, StatelessSessions};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_ALLOWED_ORIGINS: &str = "CIVILS_CORS_ALLOWED_ORIGINS";
pub const ENV_BIND_ADDRESS: &str = "CIVILS_BIND_ADDRESS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid bind address `{0}`")]
    InvalidBindAddress(String),
    #[error("invalid CORS policy: {0}")]
    Policy(#[from] ValidationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Scheme clients use to reach the server. Applies to requests whose URI
    /// carries no scheme, e.g. behind a TLS-terminating proxy.
    pub scheme: Scheme,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            scheme: Scheme::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![origin::LOCAL_REACT.into(), origin::LOCAL_VITE.into()],
            allowed_methods: vec![origin::WILDCARD.into()],
            allowed_headers: vec![origin::WILDCARD.into()],
            exposed_headers: vec![header::AUTHORIZATION.into()],
            allow_credentials: true,
            max_age_seconds: Some(DEFAULT_MAX_AGE_SECONDS),
        }
    }
}

impl CorsConfig {
    pub fn to_policy(&self) -> CorsPolicy {
        CorsPolicy {
            allowed_origins: Origin::list(self.allowed_origins.iter().cloned()),
            allowed_methods: AllowedMethods::list(self.allowed_methods.iter().cloned()),
            allowed_headers: AllowedHeaders::list(self.allowed_headers.iter().cloned()),
            exposed_headers: ExposedHeaders::list(self.exposed_headers.iter().cloned()),
            allow_credentials: self.allow_credentials,
            max_age_seconds: self.max_age_seconds,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecurityConfig {
    pub authorization: AuthorizationRule,
    /// Extra cookie names stripped from responses on top of the built-in ones.
    pub session_cookie_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "civils_security=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `path` when given, otherwise the development defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `CIVILS_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(origins) = lookup(ENV_ALLOWED_ORIGINS) {
            let origins: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .collect();
            if origins.is_empty() {
                tracing::warn!(
                    variable = ENV_ALLOWED_ORIGINS,
                    "ignoring empty origin override"
                );
            } else {
                self.cors.allowed_origins = origins;
            }
        }

        if let Some(bind) = lookup(ENV_BIND_ADDRESS)
            && !bind.trim().is_empty()
        {
            self.server.bind_address = bind.trim().to_string();
        }
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(self.server.bind_address.clone()))
    }

    pub fn security_policy(&self) -> Result<SecurityPolicy, ConfigError> {
        let cors = Cors::new(self.cors.to_policy())?;
        Ok(SecurityPolicy::new(cors)
            .authorization(self.security.authorization)
            .sessions(StatelessSessions::new(
                self.security.session_cookie_names.iter().cloned(),
            )))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
