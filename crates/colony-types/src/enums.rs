//! Agent state machines.
//!
//! Both agent kinds run a two-state machine. The variant data carries the
//! deposit reference that is only meaningful in that state, so "returning
//! with a find" and "retrieving from a deposit" cannot be confused with
//! their idle counterparts.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::DepositId;

// ---------------------------------------------------------------------------
// Scout states
// ---------------------------------------------------------------------------

/// The state of a scout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ScoutState {
    /// Wandering toward a random target, scanning for deposits.
    #[default]
    Exploring,
    /// Heading back to the hive.
    Returning {
        /// The deposit detected on this trip, if any. The discovery is only
        /// committed once the scout reaches the hive.
        found: Option<DepositId>,
    },
}

impl ScoutState {
    /// Whether the scout is heading back to the hive.
    pub const fn is_returning(self) -> bool {
        matches!(self, Self::Returning { .. })
    }

    /// The deposit this scout is carrying news of, if any.
    pub const fn found(self) -> Option<DepositId> {
        match self {
            Self::Exploring => None,
            Self::Returning { found } => found,
        }
    }
}

// ---------------------------------------------------------------------------
// Forager states
// ---------------------------------------------------------------------------

/// The state of a forager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ForagerState {
    /// Heading to (or idling at) the hive to deliver yield and pick a
    /// new deposit.
    #[default]
    Returning,
    /// Travelling to a discovered deposit to harvest it.
    Retrieving {
        /// The deposit being harvested.
        deposit: DepositId,
    },
}

impl ForagerState {
    /// Whether the forager is heading back to the hive.
    pub const fn is_returning(self) -> bool {
        matches!(self, Self::Returning)
    }

    /// The deposit this forager is assigned to, if any.
    pub const fn target_deposit(self) -> Option<DepositId> {
        match self {
            Self::Returning => None,
            Self::Retrieving { deposit } => Some(deposit),
        }
    }
}
