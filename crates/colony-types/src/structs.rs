//! Core entity structs for the colony simulation.
//!
//! All geometry is expressed in field units, with the origin at the top-left
//! corner of the field (`0..width`, `0..height`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ForagerState, ScoutState};
use crate::ids::{DepositId, ForagerId, ScoutId};

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// A position in the field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Hive & queen
// ---------------------------------------------------------------------------

/// The central hive where scouts report and foragers deliver yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Hive {
    /// Center of the hive.
    pub position: Point,
    /// Agents closer than this to the center count as "at the hive".
    pub radius: f64,
    /// Cumulative yield delivered by foragers. Never decreases.
    pub papers_analysed: f64,
}

/// Decorative queen marker drawn on top of the hive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Queen {
    /// Where the queen sits (always the hive center).
    pub position: Point,
    /// Display size in field units.
    pub size: f64,
}

// ---------------------------------------------------------------------------
// Deposits
// ---------------------------------------------------------------------------

/// A harvestable paper deposit with finite yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Deposit {
    /// Stable identifier, equal to the deposit's index in the field.
    pub id: DepositId,
    /// Location of the deposit.
    pub position: Point,
    /// Yield left to harvest; `0 <= remaining <= original`.
    pub remaining: f64,
    /// Yield the deposit started with.
    pub original: f64,
    /// Set once a scout reports the deposit at the hive.
    pub discovered: bool,
}

impl Deposit {
    /// Whether there is still anything to harvest.
    pub fn is_depleted(&self) -> bool {
        self.remaining <= 0.0
    }
}

// ---------------------------------------------------------------------------
// Agents
// ---------------------------------------------------------------------------

/// An explorer that finds deposits and reports them to the hive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Scout {
    /// Stable identifier.
    pub id: ScoutId,
    /// Current position.
    pub position: Point,
    /// Where the scout is heading while exploring.
    pub target: Point,
    /// Exploring or returning.
    pub state: ScoutState,
}

/// A harvester that ferries yield from discovered deposits to the hive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Forager {
    /// Stable identifier.
    pub id: ForagerId,
    /// Current position.
    pub position: Point,
    /// The deposit position while retrieving, the hive otherwise.
    pub target: Point,
    /// Yield picked up but not yet delivered.
    pub carried: f64,
    /// Returning or retrieving.
    pub state: ForagerState,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Serializable view of the whole world, returned to clients after every
/// tick and reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WorldSnapshot {
    /// Number of ticks run since the last reset.
    pub tick: u64,
    /// The hive, including its delivered-yield counter.
    pub hive: Hive,
    /// The queen marker.
    pub queen: Queen,
    /// All scouts, in id order.
    pub scouts: Vec<Scout>,
    /// All foragers, in id order.
    pub foragers: Vec<Forager>,
    /// All deposits, in id order, including depleted ones.
    pub deposits: Vec<Deposit>,
    /// Deposit ids in the order they were first discovered.
    pub discovery_ledger: Vec<DepositId>,
    /// Whether every deposit has been harvested to zero.
    pub all_depleted: bool,
}
