use crate::constants::origin::WILDCARD;
use crate::util::{dedupe_trimmed, equals_ignore_case};

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Allow-list of request origins.
///
/// Matching is exact (scheme, host and port) and ASCII case-insensitive.
/// Subdomain wildcards are not supported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit `Access-Control-Allow-Origin: *`.
    Any,
    /// Echo the request origin back.
    Mirror,
    Disallow,
    /// No `Origin` header, nothing to decide.
    Skip,
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds an allow-list. A `*` entry anywhere in the list turns the whole
    /// configuration into [`Origin::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = dedupe_trimmed(values);
        if values.iter().any(|value| value == WILDCARD) {
            return Self::Any;
        }

        Self::List(
            values
                .into_iter()
                .map(|value| value.trim_end_matches('/').to_string())
                .collect(),
        )
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Origin::Any)
    }

    pub fn values(&self) -> &[String] {
        match self {
            Origin::Any => &[],
            Origin::List(values) => values,
        }
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin else {
            return OriginDecision::Skip;
        };

        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Origin::Any => OriginDecision::Any,
            Origin::List(allowed) => {
                let candidate = origin.trim().trim_end_matches('/');
                if allowed
                    .iter()
                    .any(|value| equals_ignore_case(value, candidate))
                {
                    OriginDecision::Mirror
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
