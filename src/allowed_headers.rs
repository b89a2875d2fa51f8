use crate::constants::origin::WILDCARD;
use crate::util::{dedupe_trimmed, split_header_list};

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Wildcard: every requested header is accepted.
    Any,
}

impl AllowedHeaders {
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

    pub fn allows_headers(&self, request_headers: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => {
                let Some(request_headers) = request_headers else {
                    return true;
                };

                split_header_list(request_headers).all(|header| {
                    allowed
                        .iter()
                        .any(|allowed_header| allowed_header.eq_ignore_ascii_case(header))
                })
            }
        }
    }

    /// Header value answering a preflight that requested `request_headers`.
    ///
    /// Nothing is emitted when the preflight did not ask for any headers. A
    /// wildcard is answered with the requested names when credentials are on.
    pub fn header_value(&self, request_headers: Option<&str>, credentials: bool) -> Option<String> {
        let requested: Vec<&str> = request_headers
            .map(|value| split_header_list(value).collect())
            .unwrap_or_default();
        if requested.is_empty() {
            return None;
        }

        match self {
            Self::Any if credentials => Some(requested.join(",")),
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
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
