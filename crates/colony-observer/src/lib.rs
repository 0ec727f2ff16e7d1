//! Observer API server for the foraging colony simulation.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Simulation endpoints** under `/api/simulation/` to advance the
//!   world, reset it, and tune parameters while it runs
//! - **Minimal HTML status page** (`GET /`) showing the current tick,
//!   analysed yield, and discovery progress
//!
//! # Architecture
//!
//! Ticks are driven by clients: every `GET /api/simulation/state` runs one
//! tick and returns the resulting snapshot. The world lives behind a
//! [`tokio::sync::Mutex`] in [`AppState`], so concurrent requests are
//! applied one at a time.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
