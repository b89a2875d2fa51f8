use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_MAX_AGE_SECONDS, header, origin};
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use crate::util::is_http_token;
use once_cell::sync::Lazy;
use thiserror::Error;

static DEVELOPMENT_POLICY: Lazy<CorsPolicy> = Lazy::new(|| CorsPolicy {
    allowed_origins: Origin::list([origin::LOCAL_REACT, origin::LOCAL_VITE]),
    allowed_methods: AllowedMethods::any(),
    allowed_headers: AllowedHeaders::any(),
    exposed_headers: ExposedHeaders::list([header::AUTHORIZATION]),
    allow_credentials: true,
    max_age_seconds: Some(DEFAULT_MAX_AGE_SECONDS),
});

/// Cross-origin policy applied to every inbound request.
///
/// Immutable once handed to [`crate::Cors::new`], which validates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allowed_origins: Origin,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub allow_credentials: bool,
    pub max_age_seconds: Option<u64>,
}

/// Reasons a [`CorsPolicy`] is refused at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "allow_credentials requires an explicit origin list; browsers reject a wildcard origin on credentialed requests"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("allowed origins cannot contain an empty entry")]
    EmptyOrigin,
    #[error("the opaque `null` origin cannot be allowed")]
    NullOrigin,
    #[error("allowed origin `{0}` must include a scheme such as http:// or https://")]
    OriginMissingScheme(String),
    #[error("`{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("`{0}` is not a valid allowed header name")]
    InvalidAllowedHeader(String),
    #[error("`{0}` is not a valid exposed header name")]
    InvalidExposedHeader(String),
    #[error(
        "exposing `*` is ignored by browsers on credentialed requests; list the headers explicitly"
    )]
    WildcardExposedHeadersWithCredentials,
}

impl CorsPolicy {
    /// Policy for the local front-end dev servers on ports 3000 and 5173.
    pub fn development() -> Self {
        DEVELOPMENT_POLICY.clone()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allow_credentials && self.allowed_origins.is_any() {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        for value in self.allowed_origins.values() {
            if value.is_empty() {
                return Err(ValidationError::EmptyOrigin);
            }
            if value.eq_ignore_ascii_case(origin::NULL) {
                return Err(ValidationError::NullOrigin);
            }
            if !value.contains("://") {
                return Err(ValidationError::OriginMissingScheme(value.clone()));
            }
        }

        if let Some(invalid) = self
            .allowed_methods
            .values()
            .iter()
            .find(|value| !is_http_token(value))
        {
            return Err(ValidationError::InvalidMethod(invalid.clone()));
        }

        if let Some(invalid) = self
            .allowed_headers
            .values()
            .iter()
            .find(|value| !is_http_token(value))
        {
            return Err(ValidationError::InvalidAllowedHeader(invalid.clone()));
        }

        if self.allow_credentials && matches!(self.exposed_headers, ExposedHeaders::Any) {
            return Err(ValidationError::WildcardExposedHeadersWithCredentials);
        }

        if let Some(invalid) = self
            .exposed_headers
            .values()
            .iter()
            .find(|value| !is_http_token(value) || value.as_str() == origin::WILDCARD)
        {
            return Err(ValidationError::InvalidExposedHeader(invalid.clone()));
        }

        Ok(())
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::development()
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
