//! Web layer: HTTP surface built on axum.
//!
//! Routes:
//! - `GET /` redirects to the dashboard
//! - `POST /predict` JSON prediction
//! - `GET /health` training summary
//! - `GET|POST /dashboard/` form, summary and bar chart
//! - `GET /dashboard` redirects to `/dashboard/`
//!
//! The trained [`InferenceService`] is the router state. It is read-only, so
//! handlers share it through an `Arc` without locking.

pub mod api;
mod chart;
pub mod dashboard;
pub mod error;
mod html;
mod styles;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::InferenceService;
use crate::RulError;

pub use api::{PredictRequest, PredictResponse};
pub use error::{ApiError, ErrorBody};

/// Router state: the process-wide trained model.
pub type SharedService = Arc<InferenceService>;

/// Path the root route redirects to.
pub const DASHBOARD_PATH: &str = "/dashboard/";

async fn root() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

/// Build the application router.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/predict", post(api::predict))
        .route("/health", get(api::health))
        .route(
            DASHBOARD_PATH,
            get(dashboard::show).post(dashboard::submit),
        )
        .route("/dashboard", get(root))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Bind `addr` and serve until Ctrl-C.
///
/// # Errors
/// Returns error if the listener cannot bind or the server fails.
pub async fn serve(service: SharedService, addr: SocketAddr) -> Result<(), RulError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
