//! JSON scheduling requests.
//!
//! Front ends hand over loosely typed JSON:
//!
//! ```json
//! {"racers": ["Ada", "Bo"], "lanes": 4, "heatsPerRacer": 3, "priority": "lanes"}
//! ```
//!
//! Each field is checked separately so the caller gets a specific error.
//! Racer values are kept as-is and never inspected.

use serde_json::Value;

use super::heat::schedule_heats;
use crate::error::InputError;
use crate::models::{Criterion, Lineup, Priority, ScheduleOptions};

/// Input container for scheduling.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    /// Racers, in input order.
    pub racers: Vec<Value>,
    /// Scheduling options.
    pub options: ScheduleOptions,
}

impl ScheduleRequest {
    /// Creates a request.
    pub fn new(racers: Vec<Value>, options: ScheduleOptions) -> Self {
        Self { racers, options }
    }

    /// Reads a request from a JSON value.
    ///
    /// # Errors
    /// - [`InputError::MalformedRequest`] if `value` is not an object
    /// - [`InputError::NotAList`] if `racers` is missing or not an array
    /// - [`InputError::NoRacers`] if `racers` is empty
    /// - [`InputError::InvalidLanes`] / [`InputError::InvalidHeatsPerRacer`]
    ///   if the counts are missing, non-integer, or not positive
    /// - [`InputError::UnknownCriterion`] / [`InputError::InvalidPriority`]
    ///   for a bad `priority`
    ///
    /// Counts are range-checked against the grid limit by [`Self::schedule`].
    pub fn from_json(value: &Value) -> Result<Self, InputError> {
        let object = value
            .as_object()
            .ok_or_else(|| InputError::MalformedRequest("request must be a JSON object".into()))?;

        let racers = match object.get("racers") {
            Some(Value::Array(items)) => items.clone(),
            _ => return Err(InputError::NotAList),
        };
        if racers.is_empty() {
            return Err(InputError::NoRacers);
        }

        let lanes = positive_integer(object.get("lanes")).ok_or(InputError::InvalidLanes)?;
        let heats_per_racer = positive_integer(object.get("heatsPerRacer"))
            .ok_or(InputError::InvalidHeatsPerRacer)?;
        let priority = parse_priority(object.get("priority"))?;

        Ok(Self::new(
            racers,
            ScheduleOptions::new(lanes, heats_per_racer).with_priority(priority),
        ))
    }

    /// Parses and reads a request from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, InputError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| InputError::MalformedRequest(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Builds the schedule for this request.
    ///
    /// # Errors
    /// [`InputError::GridTooLarge`] or [`InputError::InvalidHeatsPerRacer`]
    /// if the counts overflow or exceed the grid limit.
    pub fn schedule(&self) -> Result<Lineup<'_, Value>, InputError> {
        schedule_heats(&self.racers, &self.options)
    }
}

// Integral JSON numbers above zero; `4.0` counts, `4.5` and `"4"` do not.
fn positive_integer(value: Option<&Value>) -> Option<usize> {
    let Some(Value::Number(number)) = value else {
        return None;
    };
    if let Some(n) = number.as_u64() {
        return usize::try_from(n).ok().filter(|&n| n > 0);
    }
    let f = number.as_f64()?;
    if f.fract() == 0.0 && f >= 1.0 && f <= usize::MAX as f64 {
        Some(f as usize)
    } else {
        None
    }
}

fn parse_priority(value: Option<&Value>) -> Result<Priority, InputError> {
    match value {
        None | Some(Value::Null) => Ok(Priority::default()),
        Some(Value::String(tag)) => Ok(Priority::Single(tag.parse()?)),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(tag) => tag.parse::<Criterion>(),
                _ => Err(InputError::InvalidPriority),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Priority::Ordered),
        Some(_) => Err(InputError::InvalidPriority),
    }
}
