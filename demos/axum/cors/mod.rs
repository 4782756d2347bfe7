use std::sync::Arc;

use endpoint_cors_rs::{CorsHandler, CorsSettings, constants::method};

pub mod exchange;
pub mod middleware;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<CorsSettings>,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    AppState {
        settings: Arc::new(CorsSettings::with_origins(["http://www.example.com"])),
        greeting: "Welcome to the Axum CORS example!",
    }
}

/// Per-request CORS setup shared by `/public` and `/private`.
pub fn endpoint_cors(settings: &CorsSettings, credentials: bool) -> CorsHandler {
    let mut handler = CorsHandler::new(settings);
    let cors = handler.cors_mut();
    cors.allow_method(method::GET);
    cors.credentials_supported = credentials;
    handler
}
