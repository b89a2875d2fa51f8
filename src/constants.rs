pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const HOST: &str = "Host";
    pub const ORIGIN: &str = "Origin";
    pub const SET_COOKIE: &str = "Set-Cookie";
    pub const VARY: &str = "Vary";
    pub const WWW_AUTHENTICATE: &str = "WWW-Authenticate";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Origins served by the local front-end dev servers.
pub mod origin {
    pub const LOCAL_REACT: &str = "http://localhost:3000";
    pub const LOCAL_VITE: &str = "http://localhost:5173";
    pub const WILDCARD: &str = "*";
    pub const NULL: &str = "null";
}

/// Cookie names treated as server-side session handles.
pub const SESSION_COOKIE_NAMES: [&str; 4] = ["JSESSIONID", "SESSION", "session", "sid"];

pub const DEFAULT_MAX_AGE_SECONDS: u64 = 3600;
