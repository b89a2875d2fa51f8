//! axum wiring for the security pipeline.
//!
//! Requests pass through, in order: stateless session enforcement, CORS,
//! authorization, then the route handlers.

pub mod middleware;

use crate::config::Scheme;
use crate::security::SecurityPolicy;
use axum::{Router, middleware::from_fn_with_state, routing::get};
use std::sync::Arc;

use self::middleware::{authorization_middleware, cors_middleware, session_middleware};

#[derive(Clone, Debug)]
pub struct AppState {
    pub security: Arc<SecurityPolicy>,
    /// Scheme for requests whose URI has none; used in same-origin checks.
    pub scheme: Scheme,
}

impl AppState {
    pub fn new(security: SecurityPolicy) -> Self {
        Self {
            security: Arc::new(security),
            scheme: Scheme::default(),
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }
}

/// Pipeline with only the built-in `/health` route.
pub fn router(state: AppState) -> Router {
    router_with(state, Router::new())
}

/// Mounts `routes` behind the security pipeline.
pub fn router_with(state: AppState, routes: Router<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes)
        .layer(from_fn_with_state(state.clone(), authorization_middleware))
        .layer(from_fn_with_state(state.clone(), cors_middleware))
        .layer(from_fn_with_state(state.clone(), session_middleware))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
