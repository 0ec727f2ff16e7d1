//! World state, agent controllers, and tick cycle for the foraging colony.
//!
//! A hive sits at the center of a rectangular field scattered with paper
//! deposits. Scouts roam the field, detect deposits, and report them when
//! they get home. Foragers carry yield from reported deposits back to the
//! hive until every deposit is drained.
//!
//! # Modules
//!
//! - [`clock`] -- Injectable wall clock, tick counter, and time factor.
//! - [`config`] -- Configuration loading from `colony-config.yaml` into
//!   strongly-typed structs.
//! - [`field`] -- Deposits and the discovery ledger.
//! - [`forager`] -- Forager state machine.
//! - [`geometry`] -- Fixed-length steering and random placement.
//! - [`params`] -- Tunable simulation parameters and their validation.
//! - [`scout`] -- Scout state machine.
//! - [`tick`] -- The per-tick update cycle.
//! - [`world`] -- [`WorldState`] and its reset/update operations.

pub mod clock;
pub mod config;
pub mod field;
pub mod forager;
pub mod geometry;
pub mod params;
pub mod scout;
pub mod tick;
pub mod world;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, SimulationConfig};
pub use params::{ParameterError, ParameterName, SimulationParameters};
pub use tick::TickSummary;
pub use world::WorldState;
