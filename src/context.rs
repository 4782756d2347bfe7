use crate::constants::method;

/// The request fields CORS negotiation reads, borrowed from the hosting framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn is_options(&self) -> bool {
        self.method == method::OPTIONS
    }
}
