use crate::headers::Headers;
use thiserror::Error;

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    /// Answer the preflight directly with these headers.
    PreflightAccepted { headers: Headers },
    PreflightRejected(PreflightRejection),
    /// Let the request through and add these headers to its response.
    SimpleAccepted { headers: Headers },
    SimpleRejected(SimpleRejection),
    /// Not a cross-origin request.
    NotApplicable,
}

#[derive(Debug, Clone)]
pub struct PreflightRejection {
    pub headers: Headers,
    pub reason: PreflightRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: String },
}

#[derive(Debug, Clone)]
pub struct SimpleRejection {
    pub headers: Headers,
    pub reason: SimpleRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleRejectionReason {
    OriginNotAllowed,
}

/// Errors that can be produced during CORS evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorsError {
    #[error(
        "origin resolved to `*` while credentials are enabled; this combination is forbidden by the CORS specification"
    )]
    InvalidOriginAnyWithCredentials,
}
