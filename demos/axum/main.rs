mod cors;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use cors::middleware::{private_cors, public_cors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let app_state = cors::build_state();

    let public = Router::new()
        .route("/public", get(routes::no_content).options(routes::no_content))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            public_cors,
        ));
    let private = Router::new()
        .route("/private", get(routes::greet).options(routes::no_content))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            private_cors,
        ));

    let app = public.merge(private).with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:8000".parse().unwrap();
    tracing::info!("Axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
