//! REST API endpoint handlers for the Observer server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/simulation/state` | Advance one tick, return the snapshot |
//! | `POST` | `/api/simulation/reset` | Start a new run |
//! | `POST` | `/api/simulation/update_params/{param}/{value}` | Change one parameter |
//! | `GET` | `/api/simulation/params` | Current parameters |

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use colony_core::SimulationParameters;
use tracing::debug;

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing the run's progress and API links.
///
/// Reading the page does not advance the simulation.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let world = state.world.lock().await;
    let tick = world.tick();
    let analysed = world.hive().papers_analysed;
    let discovered = world.field().ledger().len();
    let total = world.field().len();
    let status = if world.all_depleted() {
        "DEPLETED"
    } else {
        "FORAGING"
    };
    drop(world);

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Colony Observer</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Colony Observer</h1>
    <p class="subtitle">Scouts find paper deposits, foragers bring them home</p>

    <p>Status: <span class="status">{status}</span></p>

    <div>
        <div class="metric">
            <div class="label">Tick</div>
            <div class="value">{tick}</div>
        </div>
        <div class="metric">
            <div class="label">Papers analysed</div>
            <div class="value">{analysed:.1}</div>
        </div>
        <div class="metric">
            <div class="label">Deposits found</div>
            <div class="value">{discovered} / {total}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/simulation/state">/api/simulation/state</a> -- Advance one tick</li>
        <li>GET <a href="/api/simulation/params">/api/simulation/params</a> -- Current parameters</li>
        <li>POST /api/simulation/reset -- Start over (optional JSON parameters)</li>
        <li>POST /api/simulation/update_params/{{param}}/{{value}} -- Change one parameter</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/simulation/state -- advance and snapshot
// ---------------------------------------------------------------------------

/// Run one tick and return the resulting world snapshot.
pub async fn get_state(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let mut world = state.world.lock().await;
    let summary = world.advance();
    let snapshot = world.snapshot();
    drop(world);

    debug!(tick = summary.tick, "Served simulation state");
    Ok(Json(serde_json::to_value(&snapshot)?))
}

// ---------------------------------------------------------------------------
// POST /api/simulation/reset -- start a new run
// ---------------------------------------------------------------------------

/// Reset the simulation.
///
/// An empty body restarts with the configured defaults. Otherwise the body
/// is a JSON parameter object; omitted fields take their default values.
pub async fn reset(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ObserverError> {
    let params = parse_reset_body(&body)?;
    state.world.lock().await.reset(params)?;

    Ok(Json(serde_json::json!({ "status": "success" })))
}

/// Parse an optional parameter object from a reset request body.
fn parse_reset_body(body: &[u8]) -> Result<Option<SimulationParameters>, ObserverError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| ObserverError::InvalidBody(e.to_string()))
}

// ---------------------------------------------------------------------------
// POST /api/simulation/update_params/{param}/{value}
// ---------------------------------------------------------------------------

/// Change a single parameter of the running simulation.
pub async fn update_param(
    State(state): State<Arc<AppState>>,
    Path((param, value)): Path<(String, f64)>,
) -> Result<impl IntoResponse, ObserverError> {
    let name = state.world.lock().await.set_parameter(&param, value)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "param": name.as_str(),
        "value": value,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/simulation/params -- current parameters
// ---------------------------------------------------------------------------

/// Return the parameters of the current run.
pub async fn get_params(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let params = *state.world.lock().await.params();
    Ok(Json(serde_json::to_value(params)?))
}
