/// Scheme assumed when the request carries none, as behind a plain-HTTP listener.
pub const DEFAULT_SCHEME: &str = "http";

/// CORS-relevant view of an inbound request.
///
/// Header values are passed through untouched; the engine performs its own
/// case folding where the CORS protocol requires it.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    /// Scheme the request arrived on. `None` means [`DEFAULT_SCHEME`].
    pub scheme: Option<&'a str>,
    /// Value of the `Host` header, used to recognise same-origin requests.
    pub host: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            origin: None,
            scheme: None,
            host: None,
            access_control_request_method: None,
            access_control_request_headers: None,
        }
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case("OPTIONS")
            && self
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }

    /// `true` when the `Origin` header names this request's own scheme, host
    /// and port. Missing ports take the scheme's default.
    pub fn is_same_origin(&self) -> bool {
        let (Some(origin), Some(host)) = (self.origin, self.host) else {
            return false;
        };
        let Some((origin_scheme, origin_authority)) = origin.trim().split_once("://") else {
            return false;
        };

        let scheme = self.scheme.unwrap_or(DEFAULT_SCHEME);
        if !origin_scheme.eq_ignore_ascii_case(scheme) {
            return false;
        }

        let (Some((origin_host, origin_port)), Some((host_name, host_port))) =
            (split_authority(origin_authority), split_authority(host))
        else {
            return false;
        };

        let default_port = default_port(scheme);
        origin_host.eq_ignore_ascii_case(host_name)
            && origin_port.or(default_port) == host_port.or(default_port)
    }
}

fn default_port(scheme: &str) -> Option<u16> {
    if scheme.eq_ignore_ascii_case("http") {
        Some(80)
    } else if scheme.eq_ignore_ascii_case("https") {
        Some(443)
    } else {
        None
    }
}

/// Splits `host[:port]`, including bracketed IPv6 literals. A port that is
/// present but not a number yields `None`.
fn split_authority(value: &str) -> Option<(&str, Option<u16>)> {
    let value = value.trim().trim_end_matches('/');
    if value.is_empty() {
        return None;
    }

    if let Some(rest) = value.strip_prefix('[') {
        let (host, after) = rest.split_once(']')?;
        let port = match after {
            "" => None,
            port => Some(port.strip_prefix(':')?.parse().ok()?),
        };
        return Some((host, port));
    }

    match value.rsplit_once(':') {
        Some((host, port)) => Some((host, Some(port.parse().ok()?))),
        None => Some((value, None)),
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
