use axum::{
    body::Body,
    extract::{Request, State},
    http::{
        HeaderMap, HeaderName, HeaderValue, StatusCode,
        header::{SET_COOKIE, WWW_AUTHENTICATE},
    },
    middleware::Next,
    response::Response,
};

use super::AppState;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::result::{
    CorsDecision, CorsError, PreflightRejectionReason, SimpleRejection, SimpleRejectionReason,
};
use crate::security::{AuthorizationDecision, SecurityPolicy};

/// Drops session cookies and Basic challenges from every response.
pub async fn session_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    strip_session_state(response.headers_mut(), &state.security);
    response
}

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request, state.scheme.as_str());
    let context = owned_ctx.as_request_context();
    let cors = state.security.policy_source().resolve_policy(&context);

    match cors.check(&context) {
        Ok(CorsDecision::PreflightAccepted { headers }) => {
            plain_response(StatusCode::NO_CONTENT, Body::empty(), &headers)
        }
        Ok(CorsDecision::PreflightRejected(rejection)) => plain_response(
            StatusCode::FORBIDDEN,
            Body::from(rejection_message(&rejection.reason)),
            &rejection.headers,
        ),
        Ok(CorsDecision::SimpleAccepted { headers }) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
        Ok(CorsDecision::SimpleRejected(rejection)) => simple_rejection_response(rejection),
        Ok(CorsDecision::NotApplicable) => next.run(request).await,
        Err(err) => middleware_error_response(err),
    }
}

pub async fn authorization_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match state
        .security
        .authorize(request.method().as_str(), request.uri().path())
    {
        AuthorizationDecision::Permit => next.run(request).await,
        AuthorizationDecision::Deny => {
            tracing::debug!(path = request.uri().path(), "request denied by authorization rule");
            plain_response(
                StatusCode::FORBIDDEN,
                Body::from("Access denied"),
                &Headers::default(),
            )
        }
    }
}

fn strip_session_state(headers: &mut HeaderMap, security: &SecurityPolicy) {
    let sessions = security.stateless_sessions();
    retain_values(headers, &SET_COOKIE, |value| {
        let is_session = sessions.is_session_cookie(value);
        if is_session {
            tracing::debug!("dropped session cookie from stateless response");
        }
        !is_session
    });

    if !security.http_basic_enabled() {
        retain_values(headers, &WWW_AUTHENTICATE, |value| !offers_basic_challenge(value));
    }
}

/// `true` when any challenge in a `WWW-Authenticate` value uses the Basic
/// scheme. A value may list several challenges separated by commas; an
/// auth-param after a scheme contains `=` while a new scheme token does not.
/// Commas inside quoted strings do not separate items.
fn offers_basic_challenge(value: &str) -> bool {
    let mut in_quotes = false;
    let mut escaped = false;
    let mut start = 0;
    let mut items = Vec::new();
    for (idx, ch) in value.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                items.push(&value[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    items.push(&value[start..]);

    items.into_iter().any(|item| {
        let scheme = item.split_whitespace().next().unwrap_or_default();
        !scheme.contains('=') && scheme.eq_ignore_ascii_case("basic")
    })
}

/// Keeps only the values of `name` for which `keep` holds. Values that are
/// not visible ASCII are kept untouched.
fn retain_values<F>(headers: &mut HeaderMap, name: &HeaderName, keep: F)
where
    F: Fn(&str) -> bool,
{
    let values: Vec<HeaderValue> = headers.get_all(name).iter().cloned().collect();
    if values.is_empty() {
        return;
    }

    headers.remove(name);
    for value in values {
        if value.to_str().map(&keep).unwrap_or(true) {
            headers.append(name.clone(), value);
        }
    }
}

fn middleware_error_response(err: CorsError) -> Response {
    tracing::error!(error = %err, "CORS evaluation failed");
    plain_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        Body::from(format!("CORS configuration error: {err}")),
        &Headers::default(),
    )
}

fn plain_response(status: StatusCode, body: Body, headers: &Headers) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    apply_headers(response.headers_mut(), headers);
    response
}

fn simple_rejection_response(rejection: SimpleRejection) -> Response {
    plain_response(
        StatusCode::FORBIDDEN,
        Body::from(simple_rejection_message(&rejection.reason)),
        &rejection.headers,
    )
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            if name.eq_ignore_ascii_case(header::VARY) {
                map.append(header_name, header_value);
            } else {
                map.insert(header_name, header_value);
            }
        }
    }
}

fn rejection_message(reason: &PreflightRejectionReason) -> String {
    match reason {
        PreflightRejectionReason::OriginNotAllowed => {
            "Preflight rejected: origin not allowed".into()
        }
        PreflightRejectionReason::MethodNotAllowed { requested_method } => {
            format!("Preflight rejected: method '{requested_method}' not allowed")
        }
        PreflightRejectionReason::HeadersNotAllowed { requested_headers } => {
            format!("Preflight rejected: headers '{requested_headers}' not allowed")
        }
    }
}

fn simple_rejection_message(reason: &SimpleRejectionReason) -> &'static str {
    match reason {
        SimpleRejectionReason::OriginNotAllowed => "Invalid CORS request: origin not allowed",
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    scheme: String,
    host: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request, default_scheme: &str) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            scheme: request
                .uri()
                .scheme_str()
                .unwrap_or(default_scheme)
                .to_string(),
            host: header_value(headers, header::HOST)
                .or_else(|| request.uri().authority().map(|authority| authority.to_string())),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            scheme: Some(self.scheme.as_str()),
            host: self.host.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
