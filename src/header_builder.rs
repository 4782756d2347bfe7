use crate::configuration::CorsConfiguration;
use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::request_headers::exposed_headers;

pub(crate) struct HeaderBuilder<'a> {
    config: &'a CorsConfiguration,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(config: &'a CorsConfiguration) -> Self {
        Self { config }
    }

    /// Reflects the request origin verbatim, never `*`.
    pub(crate) fn build_origin_header(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
            origin.to_string(),
        );
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.config.credentials_supported {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                "true".to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS.to_string(),
            join(self.config.allowed_methods.iter().map(String::as_str)),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let exposed = exposed_headers(&self.config.request_headers);
        if exposed.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
            join(exposed),
        );
        headers
    }

    pub(crate) fn build_allow_header<'m, I>(supported_methods: I) -> HeaderCollection
    where
        I: IntoIterator<Item = &'m str>,
    {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ALLOW.to_string(), join(supported_methods));
        headers
    }
}

fn join<'s, I>(values: I) -> String
where
    I: IntoIterator<Item = &'s str>,
{
    values.into_iter().collect::<Vec<_>>().join(",")
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
