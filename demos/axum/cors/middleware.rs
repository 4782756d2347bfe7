use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use endpoint_cors_rs::{ExchangeError, HttpExchange};
use tracing::warn;

use super::{AppState, endpoint_cors, exchange::AxumExchange};

pub async fn public_cors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    cors_middleware(&state, false, request, next).await
}

pub async fn private_cors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    cors_middleware(&state, true, request, next).await
}

async fn cors_middleware(
    state: &AppState,
    credentials: bool,
    request: Request,
    next: Next,
) -> Response {
    let handler = endpoint_cors(&state.settings, credentials);
    let mut exchange = AxumExchange::new(request.method().as_str(), request.headers());

    if request.method() == Method::OPTIONS {
        return match handler.options(&mut exchange) {
            Ok(_) => finished_response(exchange),
            Err(err) => error_response(err),
        };
    }

    // An earlier stage finishing the response must not receive CORS headers.
    if exchange.request_header("X-Fail").is_some() {
        if let Err(err) = exchange.set_status(400) {
            return error_response(err);
        }
        exchange.finish();
    }

    if let Err(err) = handler.prepare(&mut exchange) {
        return error_response(err);
    }

    if exchange.is_finished() {
        return finished_response(exchange);
    }

    let mut response = next.run(request).await;
    response.headers_mut().extend(exchange.into_headers());
    response
}

fn finished_response(exchange: AxumExchange) -> Response {
    let status = exchange.status();
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    *response.headers_mut() = exchange.into_headers();
    response
}

fn error_response(err: ExchangeError) -> Response {
    warn!(%err, "CORS negotiation failed");
    let mut response = Response::new(Body::from(format!("CORS error: {err}")));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
