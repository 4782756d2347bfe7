use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use endpoint_cors_rs::{ExchangeError, HttpExchange};

/// Adapts an axum request's method and headers plus a pending response to
/// [`HttpExchange`].
pub struct AxumExchange {
    method: String,
    request_headers: HeaderMap,
    status: StatusCode,
    headers: HeaderMap,
    finished: bool,
}

impl AxumExchange {
    pub fn new(method: &str, request_headers: &HeaderMap) -> Self {
        Self {
            method: method.to_string(),
            request_headers: request_headers.clone(),
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            finished: false,
        }
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn into_headers(self) -> HeaderMap {
        self.headers
    }
}

impl HttpExchange for AxumExchange {
    fn method(&self) -> &str {
        &self.method
    }

    fn request_header(&self, name: &str) -> Option<&str> {
        self.request_headers
            .get(name)
            .and_then(|value| value.to_str().ok())
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
        let invalid = || ExchangeError::InvalidHeader {
            name: name.to_string(),
        };
        let header_name = HeaderName::try_from(name).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        self.headers.insert(header_name, header_value);
        Ok(())
    }

    fn set_status(&mut self, status: u16) -> Result<(), ExchangeError> {
        if self.finished {
            return Err(ExchangeError::StatusAfterFinish);
        }
        self.status =
            StatusCode::from_u16(status).map_err(|_| ExchangeError::InvalidStatus(status))?;
        Ok(())
    }
}
