use crate::configuration::CorsConfiguration;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::exchange::{ExchangeError, HttpExchange};
use crate::headers::Headers;
use crate::negotiator::CorsNegotiator;
use crate::result::PreflightResult;
use crate::settings::CorsSettings;

/// CORS support owned by a single request-handling instance.
///
/// Create one per request, adjust [`Self::cors_mut`] during endpoint setup,
/// then call [`Self::prepare`] before dispatch and [`Self::options`] as the
/// `OPTIONS` handler.
#[derive(Debug, Clone)]
pub struct CorsHandler {
    cors: CorsConfiguration,
    supported_methods: Vec<String>,
    negotiator: CorsNegotiator,
}

impl CorsHandler {
    pub fn new(settings: &CorsSettings) -> Self {
        Self::with_supported_methods(settings, method::SUPPORTED)
    }

    /// `supported_methods` feeds the `Allow` header and is independent of the
    /// CORS method allow-list.
    pub fn with_supported_methods<I, S>(settings: &CorsSettings, supported_methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cors: CorsConfiguration::new(settings.origins()),
            supported_methods: supported_methods.into_iter().map(Into::into).collect(),
            negotiator: CorsNegotiator::new(),
        }
    }

    pub fn cors(&self) -> &CorsConfiguration {
        &self.cors
    }

    pub fn cors_mut(&mut self) -> &mut CorsConfiguration {
        &mut self.cors
    }

    pub fn supported_methods(&self) -> impl Iterator<Item = &str> {
        self.supported_methods.iter().map(String::as_str)
    }

    /// Pre-dispatch hook. Adds allow-origin/-credentials for allowed origins on
    /// non-`OPTIONS` requests; does nothing once the response has finished.
    pub fn prepare<E: HttpExchange + ?Sized>(
        &self,
        exchange: &mut E,
    ) -> Result<(), ExchangeError> {
        if exchange.is_finished() {
            return Ok(());
        }

        let headers = {
            let request = request_context(exchange);
            if request.is_options() {
                return Ok(());
            }
            match self.negotiator.annotate_simple(&self.cors, &request, false) {
                Some(result) => result.headers,
                None => return Ok(()),
            }
        };

        apply_headers(exchange, &headers)
    }

    /// `OPTIONS` handler. Writes `Allow`, the status and, for accepted
    /// preflights, the CORS headers.
    pub fn options<E: HttpExchange + ?Sized>(
        &self,
        exchange: &mut E,
    ) -> Result<PreflightResult, ExchangeError> {
        let result = {
            let request = request_context(exchange);
            self.negotiator.preflight(&self.cors, &request, self.supported_methods())
        };

        exchange.set_status(result.status)?;
        apply_headers(exchange, &result.headers)?;
        Ok(result)
    }
}

fn request_context<E: HttpExchange + ?Sized>(exchange: &E) -> RequestContext<'_> {
    RequestContext {
        method: exchange.method(),
        origin: exchange.request_header(header::ORIGIN),
        access_control_request_method: exchange
            .request_header(header::ACCESS_CONTROL_REQUEST_METHOD),
        access_control_request_headers: exchange
            .request_header(header::ACCESS_CONTROL_REQUEST_HEADERS),
    }
}

fn apply_headers<E: HttpExchange + ?Sized>(
    exchange: &mut E,
    headers: &Headers,
) -> Result<(), ExchangeError> {
    for (name, value) in headers {
        exchange.set_header(name, value)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;
