use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::origin::OriginDecision;
use crate::policy::CorsPolicy;
use crate::result::CorsError;

pub(crate) enum OriginOutcome {
    Skip,
    Disallow(HeaderCollection),
    Allow(HeaderCollection),
}

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn build_origin_headers(
        &self,
        request: &RequestContext<'_>,
    ) -> Result<OriginOutcome, CorsError> {
        match self.policy.allowed_origins.resolve(request.origin) {
            OriginDecision::Any => {
                if self.policy.allow_credentials {
                    return Err(CorsError::InvalidOriginAnyWithCredentials);
                }
                let mut headers = HeaderCollection::new();
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                Ok(OriginOutcome::Allow(headers))
            }
            OriginDecision::Mirror => {
                let mut headers = HeaderCollection::new();
                headers.add_vary(header::ORIGIN);
                match request.origin {
                    Some(origin) => {
                        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.trim());
                        Ok(OriginOutcome::Allow(headers))
                    }
                    None => Ok(OriginOutcome::Disallow(headers)),
                }
            }
            OriginDecision::Disallow => {
                let mut headers = HeaderCollection::new();
                headers.add_vary(header::ORIGIN);
                Ok(OriginOutcome::Disallow(headers))
            }
            OriginDecision::Skip => Ok(OriginOutcome::Skip),
        }
    }

    /// Every CORS response varies on the origin and the preflight request headers.
    pub(crate) fn add_cors_vary(&self, headers: &mut HeaderCollection) {
        headers.add_vary(header::ORIGIN);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
    }

    pub(crate) fn add_credentials_header(&self, headers: &mut HeaderCollection) {
        if self.policy.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    pub(crate) fn add_methods_header(&self, headers: &mut HeaderCollection, requested: &str) {
        headers.push_optional(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.policy
                .allowed_methods
                .header_value(requested, self.policy.allow_credentials),
        );
    }

    pub(crate) fn add_allowed_headers(
        &self,
        headers: &mut HeaderCollection,
        requested: Option<&str>,
    ) {
        headers.push_optional(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.policy
                .allowed_headers
                .header_value(requested, self.policy.allow_credentials),
        );
    }

    pub(crate) fn add_exposed_headers(&self, headers: &mut HeaderCollection) {
        headers.push_optional(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.policy.exposed_headers.header_value(),
        );
    }

    pub(crate) fn add_max_age_header(&self, headers: &mut HeaderCollection) {
        headers.push_optional(
            header::ACCESS_CONTROL_MAX_AGE,
            self.policy.max_age_seconds.map(|seconds| seconds.to_string()),
        );
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
