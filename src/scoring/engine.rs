//! Weighted multi-criterion scorer.
//!
//! Combines criterion rules into one total per candidate:
//!
//! ```text
//! total = Σ weight(rule) × rule.evaluate(..) + 0.1 × remaining
//! ```
//!
//! held as tenths (`10 × Σ + remaining`). The remaining-heats nudge
//! favours racers with more heats left without overturning a real
//! difference in the weighted sum.

use std::cmp::Ordering;
use std::sync::Arc;

use super::rules::{LaneDiversity, OpponentDiversity, Turnover};
use super::{CriterionRule, HeatContext};
use crate::models::PriorityWeights;

/// Candidate score in tenths of a point.
pub type Score = i64;

/// Scale from points to [`Score`] units.
const TENTHS: i64 = 10;

#[derive(Debug, Clone)]
struct WeightedRule {
    rule: Arc<dyn CriterionRule>,
    weight: i64,
}

/// Scores and ranks candidates for one lane.
///
/// # Example
/// ```
/// use u_heat::models::PriorityWeights;
/// use u_heat::scoring::WeightedScorer;
///
/// let scorer = WeightedScorer::new(PriorityWeights::default());
/// assert_eq!(scorer.rule_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedScorer {
    rules: Vec<WeightedRule>,
}

impl WeightedScorer {
    /// Creates a scorer with the three built-in rules.
    pub fn new(weights: PriorityWeights) -> Self {
        Self::empty()
            .with_rule(LaneDiversity, weights.lanes)
            .with_rule(OpponentDiversity, weights.opponents)
            .with_rule(Turnover, weights.turnover)
    }

    /// Creates a scorer with no rules; only the remaining-heats nudge applies.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a weighted rule.
    pub fn with_rule<R: CriterionRule + 'static>(mut self, rule: R, weight: i64) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Total score of `racer` in `lane`.
    pub fn score(&self, racer: usize, lane: usize, context: &HeatContext<'_>) -> Score {
        let weighted: i64 = self
            .rules
            .iter()
            .map(|wr| wr.weight * wr.rule.evaluate(racer, lane, context))
            .sum();
        weighted * TENTHS + context.remaining_for(racer) as i64
    }

    /// Candidates ordered best first.
    ///
    /// Equal scores keep the lower racer index first.
    pub fn rank(&self, candidates: &[usize], lane: usize, context: &HeatContext<'_>) -> Vec<usize> {
        let mut scored: Vec<(usize, Score)> = candidates
            .iter()
            .map(|&racer| (racer, self.score(racer, lane, context)))
            .collect();
        scored.sort_by(|a, b| compare_candidates(*a, *b));
        scored.into_iter().map(|(racer, _)| racer).collect()
    }

    /// Best candidate, or `None` when there are none.
    pub fn select_best(
        &self,
        candidates: &[usize],
        lane: usize,
        context: &HeatContext<'_>,
    ) -> Option<usize> {
        candidates
            .iter()
            .map(|&racer| (racer, self.score(racer, lane, context)))
            .min_by(|a, b| compare_candidates(*a, *b))
            .map(|(racer, _)| racer)
    }
}

// Higher score first, then lower index.
fn compare_candidates(a: (usize, Score), b: (usize, Score)) -> Ordering {
    b.1.cmp(&a.1).then(a.0.cmp(&b.0))
}

impl Default for WeightedScorer {
    fn default() -> Self {
        Self::new(PriorityWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Criterion, PriorityWeights};
    use crate::scoring::{LaneLedger, PairingLedger};

    struct Fixture {
        lanes_used: LaneLedger,
        pairings: PairingLedger,
        previous: Vec<bool>,
        remaining: Vec<usize>,
        placed: Vec<usize>,
    }

    impl Fixture {
        fn fresh(racers: usize, lanes: usize, remaining: usize) -> Self {
            Self {
                lanes_used: LaneLedger::new(racers, lanes),
                pairings: PairingLedger::new(racers),
                previous: vec![false; racers],
                remaining: vec![remaining; racers],
                placed: Vec::new(),
            }
        }

        fn context(&self) -> HeatContext<'_> {
            HeatContext {
                placed: &self.placed,
                lanes_used: &self.lanes_used,
                pairings: &self.pairings,
                previous: &self.previous,
                remaining: &self.remaining,
            }
        }
    }

    #[test]
    fn test_score_fresh_state() {
        let f = Fixture::fresh(3, 2, 3);
        let scorer = WeightedScorer::default();
        // lanes 1000×10 + turnover 100×1 + opponents 10×0 = 10100 points, +0.3
        assert_eq!(scorer.score(0, 0, &f.context()), 101_003);
    }

    #[test]
    fn test_ties_break_by_lowest_index() {
        let f = Fixture::fresh(4, 2, 2);
        let scorer = WeightedScorer::default();
        assert_eq!(scorer.select_best(&[3, 1, 2], 0, &f.context()), Some(1));
        assert_eq!(scorer.rank(&[3, 1, 2], 0, &f.context()), vec![1, 2, 3]);
    }

    #[test]
    fn test_remaining_nudge_breaks_even_scores() {
        let mut f = Fixture::fresh(3, 2, 2);
        f.remaining = vec![1, 1, 3];
        let scorer = WeightedScorer::default();
        assert_eq!(scorer.select_best(&[0, 1, 2], 0, &f.context()), Some(2));
    }

    #[test]
    fn test_nudge_never_overturns_weighted_difference() {
        let mut f = Fixture::fresh(2, 2, 1);
        f.remaining = vec![1, 9];
        f.previous = vec![false, true];
        // Turnover weight 1 is the smallest possible difference: 2 points = 20 tenths > 8 tenths
        let scorer = WeightedScorer::new(PriorityWeights::from_order(&[Criterion::Lanes]));
        assert_eq!(scorer.select_best(&[0, 1], 0, &f.context()), Some(0));
    }

    #[test]
    fn test_weights_change_winner() {
        // Racer 0: new lane but ran last heat. Racer 1: rested but used this lane.
        let mut f = Fixture::fresh(2, 2, 2);
        f.previous = vec![true, false];
        f.lanes_used.record(1, 0);

        let lanes_first = WeightedScorer::new(PriorityWeights::from_order(&[
            Criterion::Lanes,
            Criterion::Turnover,
        ]));
        let turnover_first = WeightedScorer::new(PriorityWeights::from_order(&[
            Criterion::Turnover,
            Criterion::Lanes,
        ]));

        assert_eq!(lanes_first.select_best(&[0, 1], 0, &f.context()), Some(0));
        assert_eq!(turnover_first.select_best(&[0, 1], 0, &f.context()), Some(1));
    }

    #[test]
    fn test_empty_candidates() {
        let f = Fixture::fresh(2, 2, 1);
        let scorer = WeightedScorer::default();
        assert_eq!(scorer.select_best(&[], 0, &f.context()), None);
        assert!(scorer.rank(&[], 0, &f.context()).is_empty());
    }

    #[test]
    fn test_empty_scorer_uses_nudge_only() {
        let mut f = Fixture::fresh(3, 1, 1);
        f.remaining = vec![1, 4, 2];
        let scorer = WeightedScorer::empty();
        assert_eq!(scorer.rule_count(), 0);
        assert_eq!(scorer.score(1, 0, &f.context()), 4);
        assert_eq!(scorer.rank(&[0, 1, 2], 0, &f.context()), vec![1, 2, 0]);
    }
}
