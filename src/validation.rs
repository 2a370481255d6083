//! Input validation and schedule audits.
//!
//! [`resolve_options`] checks scheduling input before any work starts and
//! resolves the criterion priority into weights. It fails fast with one
//! [`InputError`].
//!
//! [`validate_schedule`] checks a finished grid and reports every problem
//! it finds:
//! - Unfilled slots
//! - A racer in two lanes of one heat
//! - A racer with the wrong number of appearances
//! - Slots naming racers outside the input list
//! - Row width, heat count, or BYE count not matching the sizing rules

use crate::error::InputError;
use crate::models::{Criterion, PriorityWeights, Schedule, ScheduleOptions, Slot};
use crate::scheduler::{GridSize, MAX_GRID_CELLS};

/// Validated scheduling parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Number of racers.
    pub racers: usize,
    /// Number of lanes.
    pub lanes: usize,
    /// Heats each racer must run.
    pub heats_per_racer: usize,
    /// Effective criterion order.
    pub order: Vec<Criterion>,
    /// Weight per criterion.
    pub weights: PriorityWeights,
    /// Grid dimensions.
    pub grid: GridSize,
}

/// Validates input and resolves the priority.
///
/// # Errors
/// - [`InputError::NoRacers`] if `racers` is zero
/// - [`InputError::InvalidLanes`] if `options.lanes` is zero
/// - [`InputError::InvalidHeatsPerRacer`] if `options.heats_per_racer` is zero,
///   or so large that `racers × heats_per_racer` overflows
/// - [`InputError::GridTooLarge`] if the grid or the racer × lane table
///   would exceed [`MAX_GRID_CELLS`] cells
pub fn resolve_options(
    racers: usize,
    options: &ScheduleOptions,
) -> Result<ResolvedOptions, InputError> {
    if racers == 0 {
        return Err(InputError::NoRacers);
    }
    if options.lanes == 0 {
        return Err(InputError::InvalidLanes);
    }
    if options.heats_per_racer == 0 || racers.checked_mul(options.heats_per_racer).is_none() {
        return Err(InputError::InvalidHeatsPerRacer);
    }
    let grid = GridSize::try_compute(racers, options.lanes, options.heats_per_racer)
        .filter(|grid| grid.within_limit(racers))
        .ok_or(InputError::GridTooLarge {
            limit: MAX_GRID_CELLS,
        })?;

    let order = options.priority.order();
    let weights = PriorityWeights::from_order(&order);

    Ok(ResolvedOptions {
        racers,
        lanes: options.lanes,
        heats_per_racer: options.heats_per_racer,
        order,
        weights,
        grid,
    })
}

/// Audit result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A problem found in a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of schedule problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A slot was left unfilled.
    UnfilledSlot,
    /// A racer occupies more than one lane in a heat.
    DuplicateInHeat,
    /// A racer appears more or fewer times than required.
    AppearanceMismatch,
    /// A slot names a racer index outside the input list.
    UnknownRacer,
    /// A heat row's width differs from the lane count.
    LaneCountMismatch,
    /// The heat count differs from the sizing formula.
    HeatCountMismatch,
    /// The BYE count differs from `heats × lanes − racers × heats_per_racer`.
    ByeCountMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Audits a finished schedule.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(
    schedule: &Schedule,
    racers: usize,
    heats_per_racer: usize,
) -> ValidationResult {
    let mut errors = Vec::new();
    let lanes = schedule.lane_count();

    let expected = GridSize::compute(racers, lanes, heats_per_racer);
    if schedule.heat_count() != expected.heats {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeatCountMismatch,
            format!(
                "Schedule has {} heats, expected {}",
                schedule.heat_count(),
                expected.heats
            ),
        ));
    }

    let mut appearances = vec![0usize; racers];
    for (h, row) in schedule.heats().iter().enumerate() {
        if row.len() != lanes {
            errors.push(ValidationError::new(
                ValidationErrorKind::LaneCountMismatch,
                format!("Heat {h} has {} lanes, expected {lanes}", row.len()),
            ));
        }

        let mut seen = vec![false; racers];
        for (l, slot) in row.iter().enumerate() {
            match *slot {
                Slot::Racer(r) if r >= racers => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRacer,
                    format!("Heat {h} lane {l} names racer {r}, only {racers} racers exist"),
                )),
                Slot::Racer(r) => {
                    if seen[r] {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::DuplicateInHeat,
                            format!("Racer {r} appears more than once in heat {h}"),
                        ));
                    }
                    seen[r] = true;
                    appearances[r] += 1;
                }
                Slot::Unfilled => errors.push(ValidationError::new(
                    ValidationErrorKind::UnfilledSlot,
                    format!("Heat {h} lane {l} is unfilled"),
                )),
                Slot::Bye => {}
            }
        }
    }

    for (r, &count) in appearances.iter().enumerate() {
        if count != heats_per_racer {
            errors.push(ValidationError::new(
                ValidationErrorKind::AppearanceMismatch,
                format!("Racer {r} appears {count} times, expected {heats_per_racer}"),
            ));
        }
    }

    let expected_byes = racers
        .checked_mul(heats_per_racer)
        .and_then(|needed| schedule.heat_count().saturating_mul(lanes).checked_sub(needed));
    if expected_byes != Some(schedule.bye_count()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ByeCountMismatch,
            format!(
                "Schedule has {} BYEs, expected {}",
                schedule.bye_count(),
                expected_byes.map_or_else(|| "none (grid too small)".to_string(), |n| n.to_string())
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve_options(5, &ScheduleOptions::new(4, 3)).unwrap();
        assert_eq!(resolved.racers, 5);
        assert_eq!(resolved.lanes, 4);
        assert_eq!(resolved.heats_per_racer, 3);
        assert_eq!(
            resolved.order,
            vec![Criterion::Lanes, Criterion::Turnover, Criterion::Opponents]
        );
        assert_eq!(resolved.weights, PriorityWeights::default());
    }

    #[test]
    fn test_resolve_legacy_priority() {
        let options = ScheduleOptions::new(4, 3).with_priority(Priority::Single(Criterion::Turnover));
        let resolved = resolve_options(5, &options).unwrap();
        assert_eq!(resolved.weights.turnover, 1000);
        assert_eq!(resolved.weights.lanes, 100);
        assert_eq!(resolved.weights.opponents, 10);
    }

    #[test]
    fn test_resolve_rejects_no_racers() {
        assert_eq!(
            resolve_options(0, &ScheduleOptions::new(4, 3)),
            Err(InputError::NoRacers)
        );
    }

    #[test]
    fn test_resolve_rejects_zero_lanes() {
        assert_eq!(
            resolve_options(3, &ScheduleOptions::new(0, 3)),
            Err(InputError::InvalidLanes)
        );
    }

    #[test]
    fn test_resolve_rejects_zero_heats() {
        assert_eq!(
            resolve_options(3, &ScheduleOptions::new(4, 0)),
            Err(InputError::InvalidHeatsPerRacer)
        );
    }

    #[test]
    fn test_resolve_rejects_overflowing_grid() {
        assert_eq!(
            resolve_options(1, &ScheduleOptions::new(usize::MAX / 2, 3)),
            Err(InputError::GridTooLarge {
                limit: MAX_GRID_CELLS
            })
        );
        assert_eq!(
            resolve_options(2, &ScheduleOptions::new(4, usize::MAX)),
            Err(InputError::InvalidHeatsPerRacer)
        );
    }

    #[test]
    fn test_resolve_rejects_grid_over_limit() {
        // Fits in usize but not in memory: 3 heats of 2^24 lanes
        assert!(matches!(
            resolve_options(1, &ScheduleOptions::new(MAX_GRID_CELLS, 3)),
            Err(InputError::GridTooLarge { .. })
        ));
        // 1 racer × 1 heat on 2^20 lanes is still allowed
        let resolved = resolve_options(1, &ScheduleOptions::new(1 << 20, 1)).unwrap();
        assert_eq!(resolved.grid.heats, 1);
        assert_eq!(resolved.grid.necessary_byes, (1 << 20) - 1);
    }

    #[test]
    fn test_resolve_carries_grid() {
        let resolved = resolve_options(5, &ScheduleOptions::new(4, 3)).unwrap();
        assert_eq!(resolved.grid, GridSize::compute(5, 4, 3));
    }

    #[test]
    fn test_audit_with_overflowing_demand_does_not_panic() {
        let errors = validate_schedule(&valid_schedule(), 3, usize::MAX).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ByeCountMismatch));
    }

    #[test]
    fn test_empty_racers_reported_before_lanes() {
        assert_eq!(
            resolve_options(0, &ScheduleOptions::new(0, 0)),
            Err(InputError::NoRacers)
        );
    }

    fn valid_schedule() -> Schedule {
        // 3 racers, 2 lanes, 2 heats each → 3 heats, 0 BYEs
        Schedule::from_heats(
            2,
            vec![
                vec![Slot::Racer(0), Slot::Racer(1)],
                vec![Slot::Racer(2), Slot::Racer(0)],
                vec![Slot::Racer(1), Slot::Racer(2)],
            ],
        )
    }

    #[test]
    fn test_valid_schedule() {
        assert!(validate_schedule(&valid_schedule(), 3, 2).is_ok());
    }

    #[test]
    fn test_duplicate_in_heat() {
        let s = Schedule::from_heats(
            2,
            vec![
                vec![Slot::Racer(0), Slot::Racer(0)],
                vec![Slot::Racer(2), Slot::Racer(1)],
                vec![Slot::Racer(1), Slot::Racer(2)],
            ],
        );
        let errors = validate_schedule(&s, 3, 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateInHeat));
    }

    #[test]
    fn test_unfilled_and_appearance() {
        let s = Schedule::from_heats(
            2,
            vec![
                vec![Slot::Racer(0), Slot::Racer(1)],
                vec![Slot::Racer(2), Slot::Racer(0)],
                vec![Slot::Racer(1), Slot::Unfilled],
            ],
        );
        let errors = validate_schedule(&s, 3, 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnfilledSlot));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::AppearanceMismatch && e.message.contains("Racer 2")));
    }

    #[test]
    fn test_unknown_racer() {
        let s = Schedule::from_heats(
            2,
            vec![
                vec![Slot::Racer(0), Slot::Racer(1)],
                vec![Slot::Racer(2), Slot::Racer(0)],
                vec![Slot::Racer(1), Slot::Racer(7)],
            ],
        );
        let errors = validate_schedule(&s, 3, 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownRacer));
    }

    #[test]
    fn test_bye_and_heat_count_mismatch() {
        // 2 racers, 2 lanes, 1 heat each → 1 heat expected; 2 heats here
        // need 2 BYEs but carry only 1.
        let s = Schedule::from_heats(
            2,
            vec![
                vec![Slot::Racer(0), Slot::Bye],
                vec![Slot::Racer(1), Slot::Racer(0)],
            ],
        );
        let errors = validate_schedule(&s, 2, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HeatCountMismatch));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ByeCountMismatch));
    }

    #[test]
    fn test_ragged_row() {
        let s = Schedule::from_heats(
            2,
            vec![
                vec![Slot::Racer(0), Slot::Racer(1)],
                vec![Slot::Racer(2)],
                vec![Slot::Racer(1), Slot::Racer(2)],
            ],
        );
        let errors = validate_schedule(&s, 3, 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::LaneCountMismatch));
    }
}
