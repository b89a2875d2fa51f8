use crate::constants::SESSION_COOKIE_NAMES;
use crate::cors::Cors;
use crate::source::PolicySource;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Which requests the authorization stage lets through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationRule {
    /// Every request is permitted, with or without credentials.
    #[default]
    PermitAll,
    DenyAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDecision {
    Permit,
    Deny,
}

/// Stateless session handling: the server never issues a session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatelessSessions {
    cookie_names: Vec<String>,
}

impl StatelessSessions {
    pub fn new<I, S>(extra_cookie_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cookie_names: Vec<String> =
            SESSION_COOKIE_NAMES.iter().map(|name| name.to_string()).collect();
        for name in extra_cookie_names {
            let name = name.into().trim().to_string();
            if !name.is_empty() && !cookie_names.contains(&name) {
                cookie_names.push(name);
            }
        }

        Self { cookie_names }
    }

    pub fn cookie_names(&self) -> &[String] {
        &self.cookie_names
    }

    /// `true` when a `Set-Cookie` value would establish a session.
    pub fn is_session_cookie(&self, set_cookie: &str) -> bool {
        let name = set_cookie
            .split(';')
            .next()
            .and_then(|pair| pair.split('=').next())
            .map(str::trim)
            .unwrap_or_default();

        !name.is_empty()
            && self
                .cookie_names
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(name))
    }
}

impl Default for StatelessSessions {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

/// Security directives installed into the request pipeline at startup.
///
/// Form login, HTTP Basic and CSRF protection are always off: callers are
/// expected to authenticate with bearer tokens handled elsewhere.
#[derive(Clone)]
pub struct SecurityPolicy {
    authorization: AuthorizationRule,
    sessions: StatelessSessions,
    cors: Arc<dyn PolicySource>,
}

impl SecurityPolicy {
    pub fn new(cors: Cors) -> Self {
        Self::with_policy_source(Arc::new(cors))
    }

    pub fn with_policy_source(cors: Arc<dyn PolicySource>) -> Self {
        Self {
            authorization: AuthorizationRule::default(),
            sessions: StatelessSessions::default(),
            cors,
        }
    }

    pub fn authorization(mut self, rule: AuthorizationRule) -> Self {
        self.authorization = rule;
        self
    }

    pub fn sessions(mut self, sessions: StatelessSessions) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn authorization_rule(&self) -> AuthorizationRule {
        self.authorization
    }

    pub fn stateless_sessions(&self) -> &StatelessSessions {
        &self.sessions
    }

    pub fn policy_source(&self) -> &dyn PolicySource {
        self.cors.as_ref()
    }

    pub fn authorize(&self, method: &str, path: &str) -> AuthorizationDecision {
        let decision = match self.authorization {
            AuthorizationRule::PermitAll => AuthorizationDecision::Permit,
            AuthorizationRule::DenyAll => AuthorizationDecision::Deny,
        };
        tracing::trace!(method, path, ?decision, "authorization evaluated");
        decision
    }

    pub fn form_login_enabled(&self) -> bool {
        false
    }

    pub fn http_basic_enabled(&self) -> bool {
        false
    }

    pub fn csrf_protection_enabled(&self) -> bool {
        false
    }
}

impl fmt::Debug for SecurityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityPolicy")
            .field("authorization", &self.authorization)
            .field("sessions", &self.sessions)
            .field("form_login", &self.form_login_enabled())
            .field("http_basic", &self.http_basic_enabled())
            .field("csrf", &self.csrf_protection_enabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "security_test.rs"]
mod security_test;
