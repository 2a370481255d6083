//! Scheduling criteria and priority weights.
//!
//! Three fairness criteria compete during assignment. The caller orders
//! them; the order is turned into one integer weight per criterion.
//!
//! | Rank | Weight |
//! |------|--------|
//! | 0 | 1000 |
//! | 1 | 100 |
//! | 2 | 10 |
//! | unranked | 1 |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Weights by rank position.
pub const RANK_WEIGHTS: [i64; 3] = [1000, 100, 10];

/// Weight of a criterion missing from the order (or ranked past position 2).
pub const UNRANKED_WEIGHT: i64 = 1;

/// Order used when the caller gives no priority.
pub const DEFAULT_ORDER: [Criterion; 3] =
    [Criterion::Lanes, Criterion::Turnover, Criterion::Opponents];

/// A fairness criterion balanced by the greedy assigner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Lane diversity: each racer should see as many different lanes as possible.
    Lanes,
    /// Opponent diversity: each racer should meet as many different racers as possible.
    Opponents,
    /// Turnover: racers should not appear in back-to-back heats.
    Turnover,
}

impl Criterion {
    /// All criteria.
    pub const ALL: [Criterion; 3] = [Criterion::Lanes, Criterion::Opponents, Criterion::Turnover];

    /// Serialized tag (`"lanes"`, `"opponents"`, `"turnover"`).
    pub fn tag(&self) -> &'static str {
        match self {
            Criterion::Lanes => "lanes",
            Criterion::Opponents => "opponents",
            Criterion::Turnover => "turnover",
        }
    }

    /// Parses a serialized tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }

    /// Full order a single-criterion priority expands to.
    ///
    /// The named criterion always comes first; the remaining two follow
    /// in a fixed order.
    pub fn expanded_order(self) -> [Criterion; 3] {
        match self {
            Criterion::Lanes => [Criterion::Lanes, Criterion::Opponents, Criterion::Turnover],
            Criterion::Opponents => [Criterion::Opponents, Criterion::Turnover, Criterion::Lanes],
            Criterion::Turnover => [Criterion::Turnover, Criterion::Lanes, Criterion::Opponents],
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Criterion {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| InputError::UnknownCriterion(s.to_string()))
    }
}

/// Caller's criterion priority.
///
/// Either a single criterion (legacy form) or an explicit order that
/// need not name all three criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    /// One criterion first; expanded with [`Criterion::expanded_order`].
    Single(Criterion),
    /// Explicit order, highest priority first.
    Ordered(Vec<Criterion>),
}

impl Priority {
    /// The effective order, highest priority first.
    pub fn order(&self) -> Vec<Criterion> {
        match self {
            Priority::Single(c) => c.expanded_order().to_vec(),
            Priority::Ordered(order) => order.clone(),
        }
    }

    /// Resolves the order into weights.
    pub fn weights(&self) -> PriorityWeights {
        PriorityWeights::from_order(&self.order())
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Ordered(DEFAULT_ORDER.to_vec())
    }
}

impl From<Criterion> for Priority {
    fn from(c: Criterion) -> Self {
        Priority::Single(c)
    }
}

impl From<Vec<Criterion>> for Priority {
    fn from(order: Vec<Criterion>) -> Self {
        Priority::Ordered(order)
    }
}

/// One weight per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Lane-diversity weight.
    pub lanes: i64,
    /// Opponent-diversity weight.
    pub opponents: i64,
    /// Turnover weight.
    pub turnover: i64,
}

impl PriorityWeights {
    /// Builds weights from an order.
    ///
    /// A criterion's rank is the position of its first occurrence.
    pub fn from_order(order: &[Criterion]) -> Self {
        let weight_of = |criterion: Criterion| {
            order
                .iter()
                .position(|&c| c == criterion)
                .and_then(|rank| RANK_WEIGHTS.get(rank).copied())
                .unwrap_or(UNRANKED_WEIGHT)
        };

        Self {
            lanes: weight_of(Criterion::Lanes),
            opponents: weight_of(Criterion::Opponents),
            turnover: weight_of(Criterion::Turnover),
        }
    }

    /// Weight of one criterion.
    pub fn get(&self, criterion: Criterion) -> i64 {
        match criterion {
            Criterion::Lanes => self.lanes,
            Criterion::Opponents => self.opponents,
            Criterion::Turnover => self.turnover,
        }
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self::from_order(&DEFAULT_ORDER)
    }
}
