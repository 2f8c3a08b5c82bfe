//! HTTP front end for the maintenance_report crate.
//!
//! Exposes `GET /` as a liveness check and `POST /generate`, which validates a
//! [`ReportRequest`](maintenance_report::ReportRequest) body and saves the rendered report.

pub mod config;
pub mod error;
pub mod handlers;

use std::io;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use maintenance_report::ReportBuilder;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;

/// Builds the service router around the given report builder.
pub fn app(builder: ReportBuilder) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/generate", post(handlers::generate))
        .with_state(Arc::new(builder))
        .layer(TraceLayer::new_for_http())
}

/// Serves the application on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, builder: ReportBuilder) -> io::Result<()> {
    axum::serve(listener, app(builder)).await
}
