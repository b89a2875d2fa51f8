//! Stateless session and CORS policy for the civils web backend.
//!
//! The policy is built once at startup, validated, and shared read-only by
//! every request task through [`http::AppState`].

pub mod config;
pub mod constants;
pub mod http;
pub mod telemetry;

mod allowed_headers;
mod allowed_methods;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod origin;
mod policy;
mod result;
mod security;
mod source;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{AppConfig, ConfigError};
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use origin::{Origin, OriginDecision};
pub use policy::{CorsPolicy, ValidationError};
pub use result::{
    CorsDecision, CorsError, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
pub use security::{AuthorizationDecision, AuthorizationRule, SecurityPolicy, StatelessSessions};
pub use source::PolicySource;
