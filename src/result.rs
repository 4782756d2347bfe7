use crate::constants::status;
use crate::headers::Headers;
use thiserror::Error;

/// Headers to append to a non-`OPTIONS` response whose origin is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Full response for an `OPTIONS` request: status, `Allow`, and any CORS headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub status: u16,
    pub headers: Headers,
    pub outcome: PreflightOutcome,
}

impl PreflightResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, PreflightOutcome::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        self.status == status::FORBIDDEN
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightOutcome {
    /// No `Origin` header: plain `OPTIONS` method discovery.
    NotCors,
    Accepted,
    Rejected(PreflightRejectionReason),
}

/// Why a preflight was answered with `403`. Never sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreflightRejectionReason {
    #[error("Access-Control-Request-Method header missing")]
    MissingAccessControlRequestMethod,
    #[error("origin '{origin}' not allowed")]
    OriginNotAllowed { origin: String },
    #[error("method '{requested_method}' not allowed")]
    MethodNotAllowed { requested_method: String },
    #[error("headers '{}' not allowed", .requested_headers.join(","))]
    HeadersNotAllowed { requested_headers: Vec<String> },
}

/// Overall decision returned by [`CorsNegotiator::check`](crate::CorsNegotiator::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    NotApplicable,
}
