//! Forager controller.
//!
//! A forager shuttles between the hive and discovered deposits:
//!
//! - **Returning**: fly to the hive. On arrival, drop off whatever is
//!   carried (credited to the hive), then pick a random harvestable deposit
//!   and set out for it. With nothing harvestable the forager idles at the
//!   hive and checks again next tick.
//! - **Retrieving**: fly to the chosen deposit. Within harvest range, take
//!   up to `harvest_rate * time_factor` and head home. A deposit that was
//!   drained by someone else on the way is abandoned.

use colony_types::{DepositId, Forager, ForagerState, Hive};
use rand::Rng;
use tracing::trace;

use crate::field::DepositField;
use crate::geometry::step_toward;
use crate::tick::StepContext;

/// Yield moved by one forager step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForagerOutcome {
    /// Amount taken from a deposit.
    pub harvested: f64,
    /// Amount handed over to the hive.
    pub delivered: f64,
}

impl ForagerOutcome {
    const fn merge(self, other: Self) -> Self {
        Self {
            harvested: self.harvested + other.harvested,
            delivered: self.delivered + other.delivered,
        }
    }
}

/// Run one step for every forager, in id order.
pub fn update_foragers(
    foragers: &mut [Forager],
    field: &mut DepositField,
    hive: &mut Hive,
    ctx: &StepContext,
    rng: &mut impl Rng,
) -> ForagerOutcome {
    foragers
        .iter_mut()
        .map(|forager| update_forager(forager, field, hive, ctx, rng))
        .fold(ForagerOutcome::default(), ForagerOutcome::merge)
}

/// Run one step for a single forager.
pub fn update_forager(
    forager: &mut Forager,
    field: &mut DepositField,
    hive: &mut Hive,
    ctx: &StepContext,
    rng: &mut impl Rng,
) -> ForagerOutcome {
    match forager.state {
        ForagerState::Returning => return_home(forager, field, hive, ctx, rng),
        ForagerState::Retrieving { deposit } => retrieve(forager, deposit, field, hive, ctx),
    }
}

fn return_home(
    forager: &mut Forager,
    field: &DepositField,
    hive: &mut Hive,
    ctx: &StepContext,
    rng: &mut impl Rng,
) -> ForagerOutcome {
    forager.target = hive.position;
    let distance = forager.position.distance_to(hive.position);
    if distance >= hive.radius {
        step_toward(&mut forager.position, hive.position, ctx.forager_step());
        return ForagerOutcome::default();
    }

    let delivered = forager.carried;
    if delivered > 0.0 {
        hive.papers_analysed += delivered;
        forager.carried = 0.0;
        trace!(forager = %forager.id, delivered, "Forager delivered yield");
    }

    let next = choose_deposit(field, rng).and_then(|id| field.get(id));
    if let Some(record) = next {
        forager.target = record.position;
        forager.state = ForagerState::Retrieving { deposit: record.id };
    }

    ForagerOutcome {
        harvested: 0.0,
        delivered,
    }
}

fn retrieve(
    forager: &mut Forager,
    deposit: DepositId,
    field: &mut DepositField,
    hive: &Hive,
    ctx: &StepContext,
) -> ForagerOutcome {
    let Some(record) = field.get(deposit).filter(|record| !record.is_depleted()) else {
        trace!(forager = %forager.id, %deposit, "Target deposit gone, heading home");
        forager.state = ForagerState::Returning;
        forager.target = hive.position;
        return ForagerOutcome::default();
    };

    let position = record.position;
    forager.target = position;
    let distance = forager.position.distance_to(position);
    if distance >= ctx.geometry.forager_arrival_radius {
        step_toward(&mut forager.position, position, ctx.forager_step());
        return ForagerOutcome::default();
    }

    let harvested = field.harvest(deposit, ctx.harvest_amount());
    forager.carried += harvested;
    forager.state = ForagerState::Returning;
    forager.target = hive.position;
    trace!(forager = %forager.id, %deposit, harvested, "Forager harvested deposit");

    ForagerOutcome {
        harvested,
        delivered: 0.0,
    }
}

/// Pick a discovered, non-depleted deposit uniformly at random.
fn choose_deposit(field: &DepositField, rng: &mut impl Rng) -> Option<DepositId> {
    let candidates = field.harvestable();
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.random_range(0..candidates.len())).copied()
}
