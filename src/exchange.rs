use crate::constants::{header, status};
use crate::headers::Headers;
use thiserror::Error;

/// Errors raised by a hosting framework when a response cannot be changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("cannot set header '{header}' after the response has finished")]
    Finalized { header: String },
    #[error("cannot change status after the response has finished")]
    StatusAfterFinish,
    #[error("invalid header '{name}'")]
    InvalidHeader { name: String },
    #[error("invalid status code {0}")]
    InvalidStatus(u16),
}

/// What the CORS hooks need from a hosting request handler: read access to the
/// request method and headers, and write access to response headers and status.
pub trait HttpExchange {
    fn method(&self) -> &str;

    /// Looks up a request header. Names are matched case-insensitively.
    fn request_header(&self, name: &str) -> Option<&str>;

    /// `true` once an earlier stage has completed the response.
    fn is_finished(&self) -> bool;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), ExchangeError>;

    fn set_status(&mut self, status: u16) -> Result<(), ExchangeError>;
}

/// Removes entity headers that a bodiless `204`/`304` response must not carry.
///
/// `Allow` survives: it describes the resource, not the body.
pub fn clear_headers_for_status(headers: &mut Headers, status_code: u16) {
    if status_code != status::NO_CONTENT && status_code != status::NOT_MODIFIED {
        return;
    }

    headers.retain(|name, _| {
        !header::ENTITY_HEADERS
            .iter()
            .any(|entity| entity.eq_ignore_ascii_case(name))
    });
}

/// In-memory request/response pair implementing [`HttpExchange`].
///
/// Used by tests and by adapters that buffer a response before handing it to
/// the real server.
#[derive(Debug, Clone)]
pub struct ResponseBuffer {
    method: String,
    request_headers: Headers,
    status: u16,
    headers: Headers,
    finished: bool,
}

impl ResponseBuffer {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            request_headers: Headers::new(),
            status: 200,
            headers: Headers::new(),
            finished: false,
        }
    }

    pub fn with_request_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.request_headers.insert(name.into(), value.into());
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_ignore_case(&self.headers, name)
    }

    /// Completes the response. Further mutation fails with [`ExchangeError`].
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        clear_headers_for_status(&mut self.headers, self.status);
        self.finished = true;
    }

    pub fn into_parts(self) -> (u16, Headers) {
        (self.status, self.headers)
    }
}

impl HttpExchange for ResponseBuffer {
    fn method(&self) -> &str {
        &self.method
    }

    fn request_header(&self, name: &str) -> Option<&str> {
        find_ignore_case(&self.request_headers, name)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), ExchangeError> {
        if self.finished {
            return Err(ExchangeError::Finalized {
                header: name.to_string(),
            });
        }
        if name.is_empty() {
            return Err(ExchangeError::InvalidHeader {
                name: name.to_string(),
            });
        }

        match self
            .headers
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()
        {
            Some(existing) => self.headers.insert(existing, value.to_string()),
            None => self.headers.insert(name.to_string(), value.to_string()),
        };
        Ok(())
    }

    fn set_status(&mut self, status: u16) -> Result<(), ExchangeError> {
        if self.finished {
            return Err(ExchangeError::StatusAfterFinish);
        }
        if !(100..=999).contains(&status) {
            return Err(ExchangeError::InvalidStatus(status));
        }
        self.status = status;
        Ok(())
    }
}

fn find_ignore_case<'h>(headers: &'h Headers, name: &str) -> Option<&'h str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;
