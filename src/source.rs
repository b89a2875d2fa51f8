use crate::context::RequestContext;
use crate::cors::Cors;

/// Supplies the CORS policy, wrapped in its validated engine, for a request.
///
/// Implementations must be pure lookups: the pipeline calls this once per
/// cross-origin request from many tasks at once.
pub trait PolicySource: Send + Sync {
    fn resolve_policy(&self, request: &RequestContext<'_>) -> &Cors;
}

/// A single policy shared by every request.
impl PolicySource for Cors {
    fn resolve_policy(&self, _request: &RequestContext<'_>) -> &Cors {
        self
    }
}
