//! The deposit field: paper deposits plus the discovery ledger.
//!
//! Deposits are created at reset and never removed. A drained deposit stays
//! in the collection with `remaining == 0` so that every [`DepositId`]
//! keeps addressing the same record. Discovery is one-way: a deposit flips
//! to discovered at most once, and its id is appended to the ledger at that
//! moment.

use colony_types::{Deposit, DepositId, Point};
use rand::Rng;
use tracing::debug;

use crate::geometry::random_inset_point;

/// All deposits of a run and the order in which they were discovered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepositField {
    /// Deposits in id order.
    deposits: Vec<Deposit>,

    /// Ids in first-discovery order; append-only.
    ledger: Vec<DepositId>,
}

impl DepositField {
    /// An empty field.
    pub const fn new() -> Self {
        Self {
            deposits: Vec::new(),
            ledger: Vec::new(),
        }
    }

    /// Scatter `count` undiscovered deposits of `richness` yield over a
    /// `width` x `height` field, inset by `margin` from every edge.
    pub fn generate(
        rng: &mut impl Rng,
        count: u32,
        richness: f64,
        width: f64,
        height: f64,
        margin: f64,
    ) -> Self {
        let mut field = Self::new();
        for _ in 0..count {
            let position = random_inset_point(rng, width, height, margin);
            field.push(position, richness);
        }
        field
    }

    /// Add an undiscovered deposit and return its id.
    pub fn push(&mut self, position: Point, richness: f64) -> DepositId {
        let id = DepositId::new(self.deposits.len());
        let richness = richness.max(0.0);
        self.deposits.push(Deposit {
            id,
            position,
            remaining: richness,
            original: richness,
            discovered: false,
        });
        id
    }

    /// All deposits, in id order.
    pub fn deposits(&self) -> &[Deposit] {
        &self.deposits
    }

    /// Look up a deposit by id.
    pub fn get(&self, id: DepositId) -> Option<&Deposit> {
        self.deposits.get(id.index())
    }

    /// Deposit ids in the order they were first discovered.
    pub fn ledger(&self) -> &[DepositId] {
        &self.ledger
    }

    /// Number of deposits, depleted ones included.
    pub fn len(&self) -> usize {
        self.deposits.len()
    }

    /// Whether the field holds no deposits at all.
    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }

    /// The first non-depleted deposit (in id order) strictly closer than
    /// `radius` to `point`.
    pub fn first_within(&self, point: Point, radius: f64) -> Option<DepositId> {
        self.deposits
            .iter()
            .filter(|deposit| !deposit.is_depleted())
            .find(|deposit| deposit.position.distance_to(point) < radius)
            .map(|deposit| deposit.id)
    }

    /// Mark a deposit discovered and append it to the ledger.
    ///
    /// Returns `true` only on the first discovery; later calls and unknown
    /// ids are no-ops.
    pub fn commit_discovery(&mut self, id: DepositId) -> bool {
        let Some(deposit) = self.deposits.get_mut(id.index()) else {
            return false;
        };
        if deposit.discovered {
            return false;
        }
        deposit.discovered = true;
        self.ledger.push(id);
        debug!(deposit = %id, discovered = self.ledger.len(), "Deposit discovered");
        true
    }

    /// Ids of deposits that are discovered and still hold yield.
    pub fn harvestable(&self) -> Vec<DepositId> {
        self.deposits
            .iter()
            .filter(|deposit| deposit.discovered && !deposit.is_depleted())
            .map(|deposit| deposit.id)
            .collect()
    }

    /// Take up to `requested` yield from a deposit, returning the amount
    /// actually taken.
    ///
    /// The deposit never drops below zero; unknown ids, drained deposits,
    /// and non-positive requests yield nothing.
    pub fn harvest(&mut self, id: DepositId, requested: f64) -> f64 {
        let Some(deposit) = self.deposits.get_mut(id.index()) else {
            return 0.0;
        };
        if deposit.is_depleted() || requested.is_nan() || requested <= 0.0 {
            return 0.0;
        }
        let taken = requested.min(deposit.remaining);
        deposit.remaining = (deposit.remaining - taken).max(0.0);
        taken
    }

    /// Whether every deposit has been drained. Vacuously true for an empty
    /// field.
    pub fn all_depleted(&self) -> bool {
        self.deposits.iter().all(Deposit::is_depleted)
    }

    /// Total yield left across all deposits.
    pub fn total_remaining(&self) -> f64 {
        self.deposits.iter().map(|deposit| deposit.remaining).sum()
    }
}
