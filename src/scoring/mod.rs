//! Candidate scoring for lane assignment.
//!
//! Each [`CriterionRule`] turns the current assignment state into an
//! unweighted term for one candidate in one lane. [`WeightedScorer`]
//! combines the terms with the caller's [`PriorityWeights`] and ranks
//! candidates.
//!
//! # Score Convention
//! **Higher score = better candidate.** Totals are kept in integer tenths
//! of a point so that the `0.1 × remaining` nudge is exact and ties are
//! exact.
//!
//! [`PriorityWeights`]: crate::models::PriorityWeights

mod context;
mod engine;
pub mod rules;

pub use context::{HeatContext, LaneLedger, PairingLedger};
pub use engine::{Score, WeightedScorer};

use crate::models::Criterion;
use std::fmt::Debug;

/// A rule scoring one fairness criterion.
pub trait CriterionRule: Send + Sync + Debug {
    /// Criterion this rule measures; selects its weight.
    fn criterion(&self) -> Criterion;

    /// Unweighted term for placing `racer` in `lane`.
    fn evaluate(&self, racer: usize, lane: usize, context: &HeatContext<'_>) -> i64;

    /// Rule name.
    fn name(&self) -> &'static str {
        self.criterion().tag()
    }
}
