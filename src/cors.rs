use crate::context::RequestContext;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use crate::policy::{CorsPolicy, ValidationError};
use crate::result::{
    CorsDecision, CorsError, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};

/// Core CORS policy engine that evaluates requests against a [`CorsPolicy`].
#[derive(Debug, Clone)]
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    pub fn new(policy: CorsPolicy) -> Result<Self, ValidationError> {
        policy.validate()?;
        tracing::info!(
            origins = ?policy.allowed_origins,
            credentials = policy.allow_credentials,
            max_age = ?policy.max_age_seconds,
            "CORS policy installed"
        );
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub fn check(&self, request: &RequestContext<'_>) -> Result<CorsDecision, CorsError> {
        if request.origin.is_none() || request.is_same_origin() {
            return Ok(CorsDecision::NotApplicable);
        }

        if request.is_preflight() {
            self.process_preflight(request)
        } else {
            self.process_simple(request)
        }
    }

    fn process_preflight(&self, request: &RequestContext<'_>) -> Result<CorsDecision, CorsError> {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = match builder.build_origin_headers(request)? {
            OriginOutcome::Skip => return Ok(CorsDecision::NotApplicable),
            OriginOutcome::Disallow(mut headers) => {
                builder.add_cors_vary(&mut headers);
                return Ok(Self::reject_preflight(
                    request,
                    headers,
                    PreflightRejectionReason::OriginNotAllowed,
                ));
            }
            OriginOutcome::Allow(headers) => headers,
        };
        builder.add_cors_vary(&mut headers);

        let requested_method = request
            .access_control_request_method
            .unwrap_or_default()
            .trim();
        if !self.policy.allowed_methods.allows_method(requested_method) {
            return Ok(Self::reject_preflight(
                request,
                Self::strip_grants(headers),
                PreflightRejectionReason::MethodNotAllowed {
                    requested_method: requested_method.to_string(),
                },
            ));
        }

        if !self
            .policy
            .allowed_headers
            .allows_headers(request.access_control_request_headers)
        {
            return Ok(Self::reject_preflight(
                request,
                Self::strip_grants(headers),
                PreflightRejectionReason::HeadersNotAllowed {
                    requested_headers: request
                        .access_control_request_headers
                        .unwrap_or_default()
                        .to_string(),
                },
            ));
        }

        builder.add_credentials_header(&mut headers);
        builder.add_methods_header(&mut headers, requested_method);
        builder.add_allowed_headers(&mut headers, request.access_control_request_headers);
        builder.add_max_age_header(&mut headers);

        Ok(CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
        })
    }

    fn process_simple(&self, request: &RequestContext<'_>) -> Result<CorsDecision, CorsError> {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = match builder.build_origin_headers(request)? {
            OriginOutcome::Skip => return Ok(CorsDecision::NotApplicable),
            OriginOutcome::Disallow(mut headers) => {
                builder.add_cors_vary(&mut headers);
                tracing::debug!(
                    origin = ?request.origin,
                    method = request.method,
                    "cross-origin request rejected"
                );
                return Ok(CorsDecision::SimpleRejected(SimpleRejection {
                    headers: headers.into_headers(),
                    reason: SimpleRejectionReason::OriginNotAllowed,
                }));
            }
            OriginOutcome::Allow(headers) => headers,
        };
        builder.add_cors_vary(&mut headers);

        builder.add_credentials_header(&mut headers);
        builder.add_exposed_headers(&mut headers);

        Ok(CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        })
    }

    fn reject_preflight(
        request: &RequestContext<'_>,
        headers: HeaderCollection,
        reason: PreflightRejectionReason,
    ) -> CorsDecision {
        tracing::debug!(origin = ?request.origin, ?reason, "preflight rejected");
        CorsDecision::PreflightRejected(PreflightRejection {
            headers: headers.into_headers(),
            reason,
        })
    }

    /// Rejected preflights keep `Vary` only; nothing may grant access.
    fn strip_grants(headers: HeaderCollection) -> HeaderCollection {
        let mut stripped = HeaderCollection::new();
        for (name, value) in headers.into_headers() {
            if name.eq_ignore_ascii_case(crate::constants::header::VARY) {
                stripped.push(name, value);
            }
        }
        stripped
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
