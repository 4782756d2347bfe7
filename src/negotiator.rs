use crate::configuration::CorsConfiguration;
use crate::constants::status;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::request_headers::unacceptable_headers;
use crate::result::{
    CorsDecision, PreflightOutcome, PreflightRejectionReason, PreflightResult, SimpleResult,
};
use tracing::{debug, trace};

/// Stateless CORS engine. Every call reads only the configuration and request
/// it is given, so a single value can serve any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorsNegotiator;

impl CorsNegotiator {
    pub fn new() -> Self {
        Self
    }

    /// Routes `OPTIONS` to [`Self::preflight`] and everything else to
    /// [`Self::annotate_simple`] with an unfinished response.
    pub fn check<'m, I>(
        &self,
        config: &CorsConfiguration,
        request: &RequestContext<'_>,
        supported_methods: I,
    ) -> CorsDecision
    where
        I: IntoIterator<Item = &'m str>,
    {
        if request.is_options() {
            CorsDecision::Preflight(self.preflight(config, request, supported_methods))
        } else {
            match self.annotate_simple(config, request, false) {
                Some(result) => CorsDecision::Simple(result),
                None => CorsDecision::NotApplicable,
            }
        }
    }

    /// Headers for a non-preflight request, or `None` when nothing should be added.
    ///
    /// The request method is not checked against `allowed_methods`; browsers
    /// enforce simple-request restrictions themselves.
    pub fn annotate_simple(
        &self,
        config: &CorsConfiguration,
        request: &RequestContext<'_>,
        finalized: bool,
    ) -> Option<SimpleResult> {
        if finalized {
            trace!(method = request.method, "response already finished, skipping CORS");
            return None;
        }

        let origin = request.origin?;
        if !config.is_origin_allowed(origin) {
            debug!(origin, "origin not allowed, omitting CORS headers");
            return None;
        }

        let builder = HeaderBuilder::new(config);
        let mut headers = HeaderCollection::with_estimate(2);
        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_credentials_header());

        trace!(origin, method = request.method, "annotated simple CORS request");
        Some(SimpleResult {
            headers: headers.into_headers(),
        })
    }

    /// Answers an `OPTIONS` request. `Allow` is always present; CORS headers
    /// only when the preflight is accepted.
    pub fn preflight<'m, I>(
        &self,
        config: &CorsConfiguration,
        request: &RequestContext<'_>,
        supported_methods: I,
    ) -> PreflightResult
    where
        I: IntoIterator<Item = &'m str>,
    {
        let mut headers = HeaderBuilder::build_allow_header(supported_methods);

        let Some(origin) = request.origin else {
            trace!("OPTIONS without Origin, answering method discovery only");
            return PreflightResult {
                status: status::NO_CONTENT,
                headers: headers.into_headers(),
                outcome: PreflightOutcome::NotCors,
            };
        };

        if let Err(reason) = Self::validate_preflight(config, origin, request) {
            debug!(origin, %reason, "preflight rejected");
            return PreflightResult {
                status: status::FORBIDDEN,
                headers: headers.into_headers(),
                outcome: PreflightOutcome::Rejected(reason),
            };
        }

        let builder = HeaderBuilder::new(config);
        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_allowed_headers());

        debug!(origin, "preflight accepted");
        PreflightResult {
            status: status::NO_CONTENT,
            headers: headers.into_headers(),
            outcome: PreflightOutcome::Accepted,
        }
    }

    fn validate_preflight(
        config: &CorsConfiguration,
        origin: &str,
        request: &RequestContext<'_>,
    ) -> Result<(), PreflightRejectionReason> {
        let Some(requested_method) = request.access_control_request_method else {
            return Err(PreflightRejectionReason::MissingAccessControlRequestMethod);
        };

        if !config.is_origin_allowed(origin) {
            return Err(PreflightRejectionReason::OriginNotAllowed {
                origin: origin.to_string(),
            });
        }

        if !config.is_method_allowed(requested_method) {
            return Err(PreflightRejectionReason::MethodNotAllowed {
                requested_method: requested_method.to_string(),
            });
        }

        let residual = unacceptable_headers(
            request.access_control_request_headers.unwrap_or_default(),
            &config.request_headers,
        );
        if !residual.is_empty() {
            return Err(PreflightRejectionReason::HeadersNotAllowed {
                requested_headers: residual.into_iter().collect(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "negotiator_test.rs"]
mod negotiator_test;
