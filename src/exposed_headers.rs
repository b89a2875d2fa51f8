use crate::constants::origin::WILDCARD;
use crate::util::dedupe_trimmed;

/// Configuration mirror of the `Access-Control-Expose-Headers` response header.
/// An empty list exposes nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExposedHeaders {
    List(Vec<String>),
    Any,
}

impl ExposedHeaders {
    /// Builds an allow-list from the provided iterator, automatically trimming
    /// whitespace and removing duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = dedupe_trimmed(values)
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect();

        if values.len() == 1 && values[0] == WILDCARD {
            return Self::Any;
        }

        Self::List(values)
    }

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
            Self::Any => Some(WILDCARD.to_string()),
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            Self::List(values) => values,
            Self::Any => &[],
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
