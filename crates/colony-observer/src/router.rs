//! Axum router construction for the Observer API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Observer server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/simulation/state` -- advance one tick and return the world
/// - `POST /api/simulation/reset` -- start a new run
/// - `POST /api/simulation/update_params/{param}/{value}` -- change one parameter
/// - `GET /api/simulation/params` -- current parameters
///
/// CORS allows any origin so a browser visualizer can be served from
/// elsewhere.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Simulation API
        .route("/api/simulation/state", get(handlers::get_state))
        .route("/api/simulation/reset", post(handlers::reset))
        .route(
            "/api/simulation/update_params/{param}/{value}",
            post(handlers::update_param),
        )
        .route("/api/simulation/params", get(handlers::get_params))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
