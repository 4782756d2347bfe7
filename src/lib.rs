//! CORS negotiation for a single HTTP endpoint.
//!
//! A [`CorsHandler`] owns one [`CorsConfiguration`] per request and exposes the
//! two hook points a hosting framework calls: [`CorsHandler::prepare`] before
//! dispatch and [`CorsHandler::options`] for `OPTIONS`. The decision logic
//! itself lives in the stateless [`CorsNegotiator`].

pub mod constants;
mod configuration;
mod context;
mod exchange;
mod handler;
mod header_builder;
mod headers;
mod negotiator;
mod request_headers;
mod result;
mod settings;

pub use configuration::CorsConfiguration;
pub use context::RequestContext;
pub use exchange::{ExchangeError, HttpExchange, ResponseBuffer, clear_headers_for_status};
pub use handler::CorsHandler;
pub use headers::Headers;
pub use negotiator::CorsNegotiator;
pub use request_headers::{exposed_headers, parse_request_headers, unacceptable_headers};
pub use result::{
    CorsDecision, PreflightOutcome, PreflightRejectionReason, PreflightResult, SimpleResult,
};
pub use settings::CorsSettings;
