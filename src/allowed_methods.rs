use crate::constants::origin::WILDCARD;
use crate::util::dedupe_trimmed;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Any method is accepted.
    Any,
    /// Explicit list of method tokens, compared ASCII case-insensitively.
    List(Vec<String>),
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods. A lone `*` yields
    /// [`AllowedMethods::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = dedupe_trimmed(values);
        if values.iter().any(|value| value == WILDCARD) {
            return Self::Any;
        }

        Self::List(values)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_method(&self, requested: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(values) => values
                .iter()
                .any(|value| value.eq_ignore_ascii_case(requested.trim())),
        }
    }

    /// Header value for a preflight that asked for `requested`.
    ///
    /// Browsers read `*` literally on credentialed requests, so a wildcard is
    /// answered with the requested method when credentials are enabled.
    pub fn header_value(&self, requested: &str, credentials: bool) -> Option<String> {
        match self {
            Self::Any if credentials => Some(requested.trim().to_string()),
            Self::Any => Some(WILDCARD.to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            Self::Any => &[],
            Self::List(values) => values,
        }
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
