//! The simulation world and its lifecycle operations.
//!
//! [`WorldState`] owns everything a run needs: parameters, the hive, every
//! agent, the deposit field, the clock, and the random source. There is no
//! global state; the observer wraps one instance in a mutex and other
//! callers (tests, embedders) can hold as many as they like.

use std::sync::Arc;

use colony_types::{
    Forager, ForagerId, ForagerState, Hive, Point, Queen, Scout, ScoutId, ScoutState,
    WorldSnapshot,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

use crate::clock::{Clock, WorldClock};
use crate::config::{ConfigError, GeometryConfig, SimulationConfig};
use crate::field::DepositField;
use crate::geometry::random_point;
use crate::params::{ParameterError, ParameterName, SimulationParameters};

/// A complete, independently steppable simulation.
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Parameters of the current run, including live edits.
    pub(crate) params: SimulationParameters,

    /// Parameters used when a reset supplies none.
    pub(crate) defaults: SimulationParameters,

    /// Distances shaping agent behavior.
    pub(crate) geometry: GeometryConfig,

    pub(crate) hive: Hive,
    pub(crate) queen: Queen,
    pub(crate) scouts: Vec<Scout>,
    pub(crate) foragers: Vec<Forager>,
    pub(crate) field: DepositField,

    /// Tick counter and last-update timestamp.
    pub(crate) clock: WorldClock,

    /// Single random source for placement, targets, and assignments.
    pub(crate) rng: SmallRng,
}

impl WorldState {
    /// Build a world and run an initial reset with `params`.
    ///
    /// `params` also become the defaults for later parameterless resets.
    /// Both `params` and `geometry` are validated first.
    pub fn new(
        params: SimulationParameters,
        geometry: GeometryConfig,
        seed: u64,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        geometry.validate()?;
        let hive = Hive {
            position: hive_center(&params),
            radius: geometry.hive_radius,
            papers_analysed: 0.0,
        };
        let mut world = Self {
            params,
            defaults: params,
            geometry,
            hive,
            queen: Queen {
                position: hive.position,
                size: geometry.queen_size,
            },
            scouts: Vec::new(),
            foragers: Vec::new(),
            field: DepositField::new(),
            clock: WorldClock::new(clock),
            rng: SmallRng::seed_from_u64(seed),
        };
        world.populate();
        Ok(world)
    }

    /// Build a world from a loaded configuration.
    pub fn from_config(
        config: &SimulationConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            config.parameters,
            config.geometry,
            config.world.seed,
            clock,
        )
    }

    /// Discard the current run and start a new one.
    ///
    /// `None` restarts with the configured default parameters. Invalid
    /// parameters are rejected before anything changes.
    pub fn reset(
        &mut self,
        params: Option<SimulationParameters>,
    ) -> Result<WorldSnapshot, ParameterError> {
        let params = params.unwrap_or(self.defaults);
        params.validate()?;
        self.params = params;
        self.populate();
        Ok(self.snapshot())
    }

    /// Change one parameter of the running simulation.
    ///
    /// Speeds, richness, and harvest rate take effect on the next tick.
    /// Counts and field size shape the world only when they are part of the
    /// parameters passed to [`reset`](Self::reset); a parameterless reset
    /// goes back to the configured defaults and discards live edits.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<ParameterName, ParameterError> {
        let param = self.params.set(name, value)?;
        info!(param = %param, value, "Parameter updated");
        Ok(param)
    }

    /// Whether every deposit has been drained.
    pub fn all_depleted(&self) -> bool {
        self.field.all_depleted()
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.clock.tick(),
            hive: self.hive,
            queen: self.queen,
            scouts: self.scouts.clone(),
            foragers: self.foragers.clone(),
            deposits: self.field.deposits().to_vec(),
            discovery_ledger: self.field.ledger().to_vec(),
            all_depleted: self.all_depleted(),
        }
    }

    /// Parameters of the current run.
    pub const fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Parameters used by a parameterless reset.
    pub const fn default_params(&self) -> &SimulationParameters {
        &self.defaults
    }

    /// Behavior distances.
    pub const fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// The hive.
    pub const fn hive(&self) -> &Hive {
        &self.hive
    }

    /// All scouts, in id order.
    pub fn scouts(&self) -> &[Scout] {
        &self.scouts
    }

    /// All foragers, in id order.
    pub fn foragers(&self) -> &[Forager] {
        &self.foragers
    }

    /// The deposit field and discovery ledger.
    pub const fn field(&self) -> &DepositField {
        &self.field
    }

    /// Ticks run since the last reset.
    pub const fn tick(&self) -> u64 {
        self.clock.tick()
    }

    /// Rebuild hive, deposits, and agents from the current parameters.
    fn populate(&mut self) {
        let params = self.params;
        let center = hive_center(&params);

        self.hive = Hive {
            position: center,
            radius: self.geometry.hive_radius,
            papers_analysed: 0.0,
        };
        self.queen = Queen {
            position: center,
            size: self.geometry.queen_size,
        };

        self.field = DepositField::generate(
            &mut self.rng,
            params.deposit_count,
            params.field_richness,
            params.width,
            params.height,
            self.geometry.deposit_margin,
        );

        let rng = &mut self.rng;
        self.scouts = (0..params.scout_count as usize)
            .map(|index| Scout {
                id: ScoutId::new(index),
                position: center,
                target: random_point(rng, params.width, params.height),
                state: ScoutState::Exploring,
            })
            .collect();

        self.foragers = (0..params.forager_count as usize)
            .map(|index| Forager {
                id: ForagerId::new(index),
                position: center,
                target: center,
                carried: 0.0,
                state: ForagerState::Returning,
            })
            .collect();

        self.clock.restart();

        info!(
            scouts = params.scout_count,
            foragers = params.forager_count,
            deposits = params.deposit_count,
            width = params.width,
            height = params.height,
            "Simulation reset"
        );
    }
}

/// The hive sits at the field center, rounded down to whole units.
fn hive_center(params: &SimulationParameters) -> Point {
    Point::new((params.width / 2.0).floor(), (params.height / 2.0).floor())
}
