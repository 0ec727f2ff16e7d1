//! Shared application state for the Observer API server.
//!
//! [`AppState`] owns the one [`WorldState`] the HTTP API drives. Every
//! handler takes the mutex for the duration of a single core call, so a
//! tick, a reset, and a parameter update never interleave.

use colony_core::WorldState;
use tokio::sync::Mutex;

/// Shared state for all Axum handlers.
#[derive(Debug)]
pub struct AppState {
    /// The simulation.
    pub world: Mutex<WorldState>,
}

impl AppState {
    /// Wrap a world for serving.
    pub fn new(world: WorldState) -> Self {
        Self {
            world: Mutex::new(world),
        }
    }
}
