pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ALLOW: &str = "Allow";
    pub const ORIGIN: &str = "Origin";

    pub const CONTENT_ENCODING: &str = "Content-Encoding";
    pub const CONTENT_LANGUAGE: &str = "Content-Language";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const CONTENT_MD5: &str = "Content-MD5";
    pub const CONTENT_RANGE: &str = "Content-Range";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const LAST_MODIFIED: &str = "Last-Modified";

    /// Entity headers dropped from bodiless responses. `Allow` is deliberately absent.
    pub const ENTITY_HEADERS: [&str; 7] = [
        CONTENT_ENCODING,
        CONTENT_LANGUAGE,
        CONTENT_LENGTH,
        CONTENT_MD5,
        CONTENT_RANGE,
        CONTENT_TYPE,
        LAST_MODIFIED,
    ];
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";

    /// Methods an endpoint answers at the transport level unless told otherwise.
    pub const SUPPORTED: [&str; 7] = [GET, HEAD, POST, DELETE, PATCH, PUT, OPTIONS];
}

pub mod status {
    pub const NO_CONTENT: u16 = 204;
    pub const NOT_MODIFIED: u16 = 304;
    pub const FORBIDDEN: u16 = 403;
}

/// Request headers a browser may send cross-origin without them being declared.
///
/// These are never advertised in `Access-Control-Allow-Headers`.
pub const SIMPLE_REQUEST_HEADERS: [&str; 3] = ["accept", "accept-language", "content-language"];

pub fn is_simple_request_header(name: &str) -> bool {
    SIMPLE_REQUEST_HEADERS.contains(&name)
}
