use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{header, Method},
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::metrics::make_metrics_app;
use super::{log_requests, make_song_routes, state::*, ServerConfig};
use crate::catalog::Catalog;

const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub songs_count: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        songs_count: state.catalog.len(),
    };
    Json(stats)
}

/// Allows any origin, like a stock default CORS middleware.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_LENGTH, header::CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}

pub fn make_app(config: ServerConfig, catalog: SharedCatalog) -> Router {
    let state = ServerState::new(config, catalog);

    let home_router: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone());

    home_router.merge(make_song_routes(state.clone())).layer(
        ServiceBuilder::new()
            .layer(cors_layer())
            .layer(middleware::from_fn_with_state(state, log_requests)),
    )
}

/// Serves the catalog API and the metrics endpoint until either stops.
pub async fn run_server(config: ServerConfig, catalog: Catalog, metrics_port: u16) -> Result<()> {
    let address = SocketAddr::new(config.bind_address, config.port);
    let metrics_address = SocketAddr::new(config.bind_address, metrics_port);
    let app = make_app(config, Arc::new(catalog));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Could not bind to {}", address))?;
    let metrics_listener = tokio::net::TcpListener::bind(metrics_address)
        .await
        .with_context(|| format!("Could not bind metrics server to {}", metrics_address))?;

    info!("Server running on http://{}", address);
    info!("Metrics available on http://{}/metrics", metrics_address);

    let metrics_app = make_metrics_app();
    tokio::select! {
        result = async { axum::serve(listener, app).await } => {
            result.context("HTTP server stopped")
        },
        result = async { axum::serve(metrics_listener, metrics_app).await } => {
            result.context("Metrics server stopped")
        },
    }
}
