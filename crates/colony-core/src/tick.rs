//! Tick cycle: one step of the colony simulation.
//!
//! Each tick runs through these phases:
//!
//! 1. **Time** -- derive the time factor from the gap since the previous
//!    tick (or the last reset).
//! 2. **Scouts** -- every scout explores, detects, or reports home, in id
//!    order. Discoveries are committed to the ledger here.
//! 3. **Foragers** -- every forager harvests, delivers, or picks a new
//!    deposit, in id order. Foragers see discoveries committed by scouts
//!    earlier in the same tick.
//! 4. **Commit** -- record the tick number and timestamp.
//!
//! Given the same seed, parameters, and clock readings, a run is fully
//! deterministic.

use chrono::{DateTime, Utc};
use colony_types::DepositId;
use tracing::{debug, info};

use crate::config::GeometryConfig;
use crate::forager::update_foragers;
use crate::params::SimulationParameters;
use crate::scout::update_scouts;
use crate::world::WorldState;

/// Everything an agent controller needs to know about the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepContext {
    /// Live simulation parameters.
    pub params: SimulationParameters,
    /// Behavior distances.
    pub geometry: GeometryConfig,
    /// Movement and harvest scale for this tick, in `[0, 1]`.
    pub time_factor: f64,
}

impl StepContext {
    /// Distance a scout covers this tick.
    pub const fn scout_step(&self) -> f64 {
        self.params.scout_speed * self.time_factor
    }

    /// Distance a forager covers this tick.
    pub const fn forager_step(&self) -> f64 {
        self.params.forager_speed * self.time_factor
    }

    /// Yield a forager asks a deposit for this tick.
    pub const fn harvest_amount(&self) -> f64 {
        self.params.harvest_rate * self.time_factor
    }
}

/// Summary of a single tick's execution.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// The tick number that was executed.
    pub tick: u64,
    /// Time factor the tick ran with.
    pub time_factor: f64,
    /// Deposits whose discovery was committed this tick, in commit order.
    pub discovered: Vec<DepositId>,
    /// Yield taken from deposits this tick.
    pub harvested: f64,
    /// Yield handed to the hive this tick.
    pub delivered: f64,
    /// Whether every deposit is drained after this tick.
    pub all_depleted: bool,
}

impl WorldState {
    /// Run one tick at the current clock reading.
    pub fn advance(&mut self) -> TickSummary {
        let now = self.clock.now();
        self.advance_at(now)
    }

    /// Run one tick as if the clock read `now`.
    pub fn advance_at(&mut self, now: DateTime<Utc>) -> TickSummary {
        // --- Phase 1: Time ---
        let ctx = StepContext {
            params: self.params,
            geometry: self.geometry,
            time_factor: self.clock.time_factor_at(now),
        };

        // --- Phase 2: Scouts ---
        let discovered = update_scouts(
            &mut self.scouts,
            &mut self.field,
            &self.hive,
            &ctx,
            &mut self.rng,
        );

        // --- Phase 3: Foragers ---
        let outcome = update_foragers(
            &mut self.foragers,
            &mut self.field,
            &mut self.hive,
            &ctx,
            &mut self.rng,
        );

        // --- Phase 4: Commit ---
        let tick = self.clock.commit(now);
        let all_depleted = self.field.all_depleted();

        if !discovered.is_empty() {
            info!(tick, ?discovered, "Deposits reported to hive");
        }
        debug!(
            tick,
            time_factor = ctx.time_factor,
            harvested = outcome.harvested,
            delivered = outcome.delivered,
            papers_analysed = self.hive.papers_analysed,
            all_depleted,
            "Tick complete"
        );

        TickSummary {
            tick,
            time_factor: ctx.time_factor,
            discovered,
            harvested: outcome.harvested,
            delivered: outcome.delivered,
            all_depleted,
        }
    }
}
