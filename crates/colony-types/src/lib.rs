//! Shared type definitions for the foraging colony simulation.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace. Types defined here flow downstream to `TypeScript` via
//! `ts-rs` so a browser dashboard can render the same snapshot shapes.
//!
//! # Modules
//!
//! - [`ids`] -- Index-based identifiers for scouts, foragers, and deposits
//! - [`enums`] -- Scout and forager state machines
//! - [`structs`] -- Geometry, hive, deposits, agents, and the world snapshot

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ForagerState, ScoutState};
pub use ids::{DepositId, ForagerId, ScoutId};
pub use structs::{Deposit, Forager, Hive, Point, Queen, Scout, WorldSnapshot};
