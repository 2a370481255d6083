//! Input errors.
//!
//! Every variant is detected before any scheduling work starts; a
//! failed call never yields a partial grid.

use thiserror::Error;

/// Invalid scheduling input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The racers value is not a list.
    #[error("racers must be a list")]
    NotAList,

    /// The racers list is empty.
    #[error("racers list must not be empty")]
    NoRacers,

    /// Lane count is zero, negative, or not an integer.
    #[error("lanes must be a positive integer")]
    InvalidLanes,

    /// Heats-per-racer is zero, negative, or not an integer.
    #[error("heatsPerRacer must be a positive integer")]
    InvalidHeatsPerRacer,

    /// A priority entry names no known criterion.
    #[error("unknown priority criterion '{0}'")]
    UnknownCriterion(String),

    /// Priority is neither a criterion name nor a list of names.
    #[error("priority must be a criterion name or a list of criterion names")]
    InvalidPriority,

    /// The options describe a grid too large to build.
    #[error("schedule grid would exceed {limit} cells")]
    GridTooLarge {
        /// Cell limit that was exceeded.
        limit: usize,
    },

    /// The request could not be read at all.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}
