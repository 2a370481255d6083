//! Built-in criterion rules.
//!
//! Each rule scores one candidate for one lane, before weighting.
//!
//! | Rule | Term |
//! |------|------|
//! | `LaneDiversity` | 10 if the lane is new to the racer, else 0 |
//! | `OpponentDiversity` | Σ over racers already in the heat: +2 new pair, −5 repeat |
//! | `Turnover` | +1 if the racer sat out the previous heat, −1 otherwise |

use super::{CriterionRule, HeatContext};
use crate::models::Criterion;

/// Reward for a lane the racer has not used.
pub const NEW_LANE_BONUS: i64 = 10;
/// Reward per heat-mate the racer has not met.
pub const NEW_OPPONENT_BONUS: i64 = 2;
/// Penalty per heat-mate the racer has already met.
pub const REPEAT_OPPONENT_PENALTY: i64 = -5;
/// Reward for sitting out the previous heat.
pub const RESTED_BONUS: i64 = 1;
/// Penalty for running in the previous heat.
pub const BACK_TO_BACK_PENALTY: i64 = -1;

/// Prefers lanes the racer has not raced in.
#[derive(Debug, Clone, Copy)]
pub struct LaneDiversity;

impl CriterionRule for LaneDiversity {
    fn criterion(&self) -> Criterion {
        Criterion::Lanes
    }

    fn evaluate(&self, racer: usize, lane: usize, context: &HeatContext<'_>) -> i64 {
        if context.lanes_used.has_used(racer, lane) {
            0
        } else {
            NEW_LANE_BONUS
        }
    }
}

/// Prefers heat-mates the racer has not met.
#[derive(Debug, Clone, Copy)]
pub struct OpponentDiversity;

impl CriterionRule for OpponentDiversity {
    fn criterion(&self) -> Criterion {
        Criterion::Opponents
    }

    fn evaluate(&self, racer: usize, _lane: usize, context: &HeatContext<'_>) -> i64 {
        context
            .placed
            .iter()
            .map(|&other| {
                if context.pairings.have_met(racer, other) {
                    REPEAT_OPPONENT_PENALTY
                } else {
                    NEW_OPPONENT_BONUS
                }
            })
            .sum()
    }
}

/// Prefers racers who did not run in the previous heat.
#[derive(Debug, Clone, Copy)]
pub struct Turnover;

impl CriterionRule for Turnover {
    fn criterion(&self) -> Criterion {
        Criterion::Turnover
    }

    fn evaluate(&self, racer: usize, _lane: usize, context: &HeatContext<'_>) -> i64 {
        if context.was_in_previous(racer) {
            BACK_TO_BACK_PENALTY
        } else {
            RESTED_BONUS
        }
    }
}
