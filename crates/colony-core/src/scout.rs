//! Scout controller.
//!
//! A scout alternates between two states:
//!
//! - **Exploring**: fly toward a random target. On reaching it (within the
//!   arrival radius) pick a new one. After every move, scan the field for a
//!   non-depleted deposit within detection range; the first hit, in id
//!   order, sends the scout home with the deposit's id.
//! - **Returning**: fly to the hive. On arrival, commit the find (if any)
//!   to the discovery ledger, then go exploring again with a fresh target.
//!
//! A find is only shared with the colony once the scout is back at the
//! hive, so foragers never learn about a deposit at detection time.

use colony_types::{DepositId, Hive, Scout, ScoutState};
use rand::Rng;
use tracing::trace;

use crate::field::DepositField;
use crate::geometry::{random_point, step_toward};
use crate::tick::StepContext;

/// Run one step for every scout, in id order.
///
/// Returns the deposits whose discovery was committed during this step.
pub fn update_scouts(
    scouts: &mut [Scout],
    field: &mut DepositField,
    hive: &Hive,
    ctx: &StepContext,
    rng: &mut impl Rng,
) -> Vec<DepositId> {
    scouts
        .iter_mut()
        .filter_map(|scout| update_scout(scout, field, hive, ctx, rng))
        .collect()
}

/// Run one step for a single scout.
///
/// Returns the deposit id if this step committed a new discovery.
pub fn update_scout(
    scout: &mut Scout,
    field: &mut DepositField,
    hive: &Hive,
    ctx: &StepContext,
    rng: &mut impl Rng,
) -> Option<DepositId> {
    match scout.state {
        ScoutState::Exploring => {
            explore(scout, field, ctx, rng);
            None
        }
        ScoutState::Returning { found } => return_home(scout, found, field, hive, ctx, rng),
    }
}

fn explore(scout: &mut Scout, field: &DepositField, ctx: &StepContext, rng: &mut impl Rng) {
    let distance = scout.position.distance_to(scout.target);
    if distance < ctx.geometry.scout_arrival_radius {
        scout.target = random_point(rng, ctx.params.width, ctx.params.height);
        return;
    }

    step_toward(&mut scout.position, scout.target, ctx.scout_step());

    if let Some(found) = field.first_within(scout.position, ctx.geometry.scout_detection_radius) {
        trace!(scout = %scout.id, deposit = %found, "Scout detected deposit");
        scout.state = ScoutState::Returning { found: Some(found) };
    }
}

fn return_home(
    scout: &mut Scout,
    found: Option<DepositId>,
    field: &mut DepositField,
    hive: &Hive,
    ctx: &StepContext,
    rng: &mut impl Rng,
) -> Option<DepositId> {
    let distance = scout.position.distance_to(hive.position);
    if distance >= hive.radius {
        step_toward(&mut scout.position, hive.position, ctx.scout_step());
        return None;
    }

    let committed = found.filter(|id| field.commit_discovery(*id));
    scout.state = ScoutState::Exploring;
    scout.target = random_point(rng, ctx.params.width, ctx.params.height);
    committed
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use colony_types::{Point, ScoutId};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::config::GeometryConfig;
    use crate::params::SimulationParameters;

    fn ctx() -> StepContext {
        StepContext {
            params: SimulationParameters::default(),
            geometry: GeometryConfig::default(),
            time_factor: 1.0,
        }
    }

    fn hive() -> Hive {
        Hive {
            position: Point::new(500.0, 400.0),
            radius: 50.0,
            papers_analysed: 0.0,
        }
    }

    fn scout_at(position: Point, target: Point) -> Scout {
        Scout {
            id: ScoutId::new(0),
            position,
            target,
            state: ScoutState::Exploring,
        }
    }

    #[test]
    fn scout_on_deposit_turns_home_with_its_id() {
        let mut field = DepositField::new();
        let deposit = field.push(Point::new(200.0, 200.0), 100.0);
        let mut scout = scout_at(Point::new(200.0, 200.0), Point::new(900.0, 700.0));
        let mut rng = SmallRng::seed_from_u64(1);

        let committed = update_scout(&mut scout, &mut field, &hive(), &ctx(), &mut rng);

        assert_eq!(committed, None);
        assert_eq!(
            scout.state,
            ScoutState::Returning {
                found: Some(deposit)
            }
        );
        // Detection alone does not discover the deposit.
        assert!(!field.get(deposit).unwrap().discovered);
    }

    #[test]
    fn exploring_scout_moves_full_step() {
        let mut field = DepositField::new();
        let mut scout = scout_at(Point::new(0.0, 0.0), Point::new(300.0, 400.0));
        let mut rng = SmallRng::seed_from_u64(1);

        update_scout(&mut scout, &mut field, &hive(), &ctx(), &mut rng);

        let moved = scout.position.distance_to(Point::new(0.0, 0.0));
        assert!((moved - 4.0).abs() < 1e-12);
        assert_eq!(scout.state, ScoutState::Exploring);
    }

    #[test]
    fn fast_scout_overshoots_near_target() {
        let mut field = DepositField::new();
        let start = Point::new(100.0, 100.0);
        let mut scout = scout_at(start, Point::new(110.0, 100.0));
        let mut ctx = ctx();
        ctx.params.scout_speed = 1000.0;
        let mut rng = SmallRng::seed_from_u64(1);

        update_scout(&mut scout, &mut field, &hive(), &ctx, &mut rng);

        assert!((scout.position.distance_to(start) - 1000.0).abs() < 1e-9);
        assert!((scout.position.x - 1100.0).abs() < 1e-9);
        assert_eq!(scout.state, ScoutState::Exploring);
    }

    #[test]
    fn arrival_retargets_without_moving_or_scanning() {
        let mut field = DepositField::new();
        field.push(Point::new(100.0, 100.0), 100.0);
        let target = Point::new(102.0, 100.0);
        let mut scout = scout_at(Point::new(100.0, 100.0), target);
        let mut rng = SmallRng::seed_from_u64(1);

        update_scout(&mut scout, &mut field, &hive(), &ctx(), &mut rng);

        assert_eq!(scout.position, Point::new(100.0, 100.0));
        assert_ne!(scout.target, target);
        assert_eq!(scout.state, ScoutState::Exploring);
    }

    #[test]
    fn depleted_deposits_are_ignored() {
        let mut field = DepositField::new();
        let deposit = field.push(Point::new(200.0, 200.0), 100.0);
        field.harvest(deposit, 100.0);
        let mut scout = scout_at(Point::new(200.0, 200.0), Point::new(900.0, 700.0));
        let mut rng = SmallRng::seed_from_u64(1);

        update_scout(&mut scout, &mut field, &hive(), &ctx(), &mut rng);

        assert_eq!(scout.state, ScoutState::Exploring);
    }

    #[test]
    fn returning_scout_commits_discovery_at_hive() {
        let mut field = DepositField::new();
        let deposit = field.push(Point::new(200.0, 200.0), 100.0);
        let mut scout = scout_at(Point::new(510.0, 400.0), Point::new(0.0, 0.0));
        scout.state = ScoutState::Returning {
            found: Some(deposit),
        };
        let mut rng = SmallRng::seed_from_u64(1);

        let committed = update_scout(&mut scout, &mut field, &hive(), &ctx(), &mut rng);

        assert_eq!(committed, Some(deposit));
        assert!(field.get(deposit).unwrap().discovered);
        assert_eq!(field.ledger(), &[deposit]);
        assert_eq!(scout.state, ScoutState::Exploring);
    }

    #[test]
    fn second_report_of_same_deposit_is_not_recorded() {
        let mut field = DepositField::new();
        let deposit = field.push(Point::new(200.0, 200.0), 100.0);
        field.commit_discovery(deposit);
        let mut scout = scout_at(Point::new(500.0, 400.0), Point::new(0.0, 0.0));
        scout.state = ScoutState::Returning {
            found: Some(deposit),
        };
        let mut rng = SmallRng::seed_from_u64(1);

        let committed = update_scout(&mut scout, &mut field, &hive(), &ctx(), &mut rng);

        assert_eq!(committed, None);
        assert_eq!(field.ledger(), &[deposit]);
    }

    #[test]
    fn returning_scout_flies_toward_hive() {
        let mut field = DepositField::new();
        let mut scout = scout_at(Point::new(500.0, 100.0), Point::new(0.0, 0.0));
        scout.state = ScoutState::Returning { found: None };
        let mut rng = SmallRng::seed_from_u64(1);

        update_scout(&mut scout, &mut field, &hive(), &ctx(), &mut rng);

        assert_eq!(scout.position, Point::new(500.0, 104.0));
        assert!(scout.state.is_returning());
    }

    #[test]
    fn update_scouts_collects_all_commits() {
        let mut field = DepositField::new();
        let first = field.push(Point::new(200.0, 200.0), 100.0);
        let second = field.push(Point::new(800.0, 600.0), 100.0);
        let mut scouts = vec![
            Scout {
                id: ScoutId::new(0),
                position: Point::new(500.0, 400.0),
                target: Point::new(0.0, 0.0),
                state: ScoutState::Returning {
                    found: Some(second),
                },
            },
            Scout {
                id: ScoutId::new(1),
                position: Point::new(500.0, 400.0),
                target: Point::new(0.0, 0.0),
                state: ScoutState::Returning { found: Some(first) },
            },
        ];
        let mut rng = SmallRng::seed_from_u64(1);

        let committed = update_scouts(&mut scouts, &mut field, &hive(), &ctx(), &mut rng);

        assert_eq!(committed, vec![second, first]);
        assert_eq!(field.ledger(), &[second, first]);
    }
}
