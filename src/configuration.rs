use crate::constants::SIMPLE_REQUEST_HEADERS;
use indexmap::IndexSet;

/// Per-endpoint CORS settings.
///
/// The fields are public so endpoint setup code can adjust them directly; no
/// validation is performed. Methods are matched case-sensitively and entries
/// pushed straight into `request_headers` must already be lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfiguration {
    /// Methods accepted for cross-origin use. Drives `Access-Control-Allow-Methods`.
    pub allowed_methods: IndexSet<String>,
    /// Origins that receive `Access-Control-Allow-Origin`.
    pub allowed_origins: IndexSet<String>,
    /// Emit `Access-Control-Allow-Credentials: true` for allowed origins.
    pub credentials_supported: bool,
    /// Lower-cased header names acceptable in cross-origin requests. Always
    /// seeded with [`SIMPLE_REQUEST_HEADERS`].
    pub request_headers: IndexSet<String>,
}

impl CorsConfiguration {
    pub fn new<I, S>(default_origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_methods: IndexSet::new(),
            allowed_origins: default_origins.into_iter().map(Into::into).collect(),
            credentials_supported: false,
            request_headers: SIMPLE_REQUEST_HEADERS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    pub fn allow_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.allowed_methods.insert(method.into());
        self
    }

    pub fn allow_origin(&mut self, origin: impl Into<String>) -> &mut Self {
        self.allowed_origins.insert(origin.into());
        self
    }

    /// Declares an extra acceptable request header, lower-casing it first.
    pub fn accept_header(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.request_headers.insert(name.as_ref().trim().to_ascii_lowercase());
        self
    }

    pub fn with_credentials(&mut self, enabled: bool) -> &mut Self {
        self.credentials_supported = enabled;
        self
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.contains(origin)
    }

    pub fn is_method_allowed(&self, method: &str) -> bool {
        self.allowed_methods.contains(method)
    }
}

impl Default for CorsConfiguration {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

#[cfg(test)]
#[path = "configuration_test.rs"]
mod configuration_test;
