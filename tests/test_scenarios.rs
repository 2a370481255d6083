//! End-to-end scheduling scenarios.

use serde_json::json;
use u_heat::models::{Criterion, Priority, Schedule, ScheduleOptions, Slot};
use u_heat::scheduler::{HeatScheduler, ScheduleKpi, ScheduleRequest};
use u_heat::validation::validate_schedule;
use u_heat::{schedule_heats, InputError};

fn build(racers: usize, options: &ScheduleOptions) -> Schedule {
    HeatScheduler::new().schedule(racers, options).unwrap()
}

fn assert_sound(schedule: &Schedule, racers: usize, heats_per_racer: usize) {
    if let Err(errors) = validate_schedule(schedule, racers, heats_per_racer) {
        panic!("schedule failed audit: {errors:?}");
    }
}

#[test]
fn scenario_a_five_racers_four_lanes() {
    let schedule = build(5, &ScheduleOptions::new(4, 3));

    assert_eq!(schedule.heat_count(), 4);
    assert_eq!(schedule.bye_count(), 1);
    let byes: Vec<(usize, usize)> = schedule
        .cells()
        .filter(|(_, _, slot)| slot.is_bye())
        .map(|(h, l, _)| (h, l))
        .collect();
    assert_eq!(byes.len(), 1);
    let (heat, lane) = byes[0];
    assert_eq!(heat, 3);
    assert!(lane == 0 || lane == 3);

    for r in 0..5 {
        assert_eq!(schedule.appearances(r), 3);
    }
    assert_sound(&schedule, 5, 3);
}

#[test]
fn scenario_b_single_racer() {
    let schedule = build(1, &ScheduleOptions::new(4, 3));

    assert_eq!(schedule.heat_count(), 3);
    assert_eq!(schedule.placement_count(), 3);
    assert_eq!(schedule.bye_count(), 9);
    for h in 0..3 {
        assert_eq!(schedule.racers_in_heat(h), vec![0]);
    }
    assert_sound(&schedule, 1, 3);
}

#[test]
fn scenario_c_single_lane() {
    let schedule = build(4, &ScheduleOptions::new(1, 2));

    assert_eq!(schedule.heat_count(), 8);
    assert_eq!(schedule.bye_count(), 0);
    for h in 0..8 {
        assert_eq!(schedule.racers_in_heat(h).len(), 1);
    }
    for r in 0..4 {
        assert_eq!(schedule.appearances(r), 2);
    }
    assert_sound(&schedule, 4, 2);
}

#[test]
fn scenario_d_turnover_priority_reduces_back_to_back() {
    let turnover_first = ScheduleOptions::new(4, 4).with_order([
        Criterion::Turnover,
        Criterion::Lanes,
        Criterion::Opponents,
    ]);
    let lanes_first = ScheduleOptions::new(4, 4).with_order([
        Criterion::Lanes,
        Criterion::Opponents,
        Criterion::Turnover,
    ]);

    let a = build(24, &turnover_first);
    let b = build(24, &lanes_first);
    assert_sound(&a, 24, 4);
    assert_sound(&b, 24, 4);

    let kpi_a = ScheduleKpi::calculate(&a, 24);
    let kpi_b = ScheduleKpi::calculate(&b, 24);
    assert!(
        kpi_a.turnover <= kpi_b.turnover,
        "turnover-first {} > lanes-first {}",
        kpi_a.turnover,
        kpi_b.turnover
    );
}

#[test]
fn scenario_e_single_tag_matches_expanded_order() {
    let cases = [
        (
            Criterion::Lanes,
            [Criterion::Lanes, Criterion::Opponents, Criterion::Turnover],
        ),
        (
            Criterion::Opponents,
            [Criterion::Opponents, Criterion::Turnover, Criterion::Lanes],
        ),
        (
            Criterion::Turnover,
            [Criterion::Turnover, Criterion::Lanes, Criterion::Opponents],
        ),
    ];

    for (tag, order) in cases {
        let single = build(9, &ScheduleOptions::new(4, 3).with_priority(tag));
        let explicit = build(9, &ScheduleOptions::new(4, 3).with_order(order));
        assert_eq!(single, explicit, "priority {tag}");
    }
}

#[test]
fn default_priority_is_lanes_turnover_opponents() {
    let default = build(7, &ScheduleOptions::new(3, 3));
    let explicit = build(
        7,
        &ScheduleOptions::new(3, 3).with_priority(Priority::Ordered(vec![
            Criterion::Lanes,
            Criterion::Turnover,
            Criterion::Opponents,
        ])),
    );
    assert_eq!(default, explicit);
}

#[test]
fn identical_input_gives_identical_output() {
    let options = ScheduleOptions::new(4, 4).with_priority(Criterion::Opponents);
    let first = build(13, &options);
    let second = build(13, &options);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn lanes_priority_spreads_lanes() {
    // 4 racers, 4 lanes, 4 heats each: every racer can see every lane.
    let schedule = build(4, &ScheduleOptions::new(4, 4).with_priority(Criterion::Lanes));
    let kpi = ScheduleKpi::calculate(&schedule, 4);
    assert_eq!(kpi.lane_repeats, 0);
    assert_eq!(kpi.distinct_lanes_by_racer, vec![4, 4, 4, 4]);
}

#[test]
fn no_unfilled_slots_across_shapes() {
    for racers in 1..=12 {
        for lanes in 1..=6 {
            for heats_per_racer in 1..=4 {
                let schedule = build(racers, &ScheduleOptions::new(lanes, heats_per_racer));
                assert!(
                    schedule.is_complete(),
                    "{racers} racers, {lanes} lanes, {heats_per_racer} heats left unfilled slots"
                );
                assert_sound(&schedule, racers, heats_per_racer);
            }
        }
    }
}

#[test]
fn lineup_hands_back_caller_values() {
    #[derive(Debug, PartialEq)]
    struct Car {
        number: u32,
    }

    let cars: Vec<Car> = (1..=6).map(|number| Car { number }).collect();
    let lineup = schedule_heats(&cars, &ScheduleOptions::new(3, 2)).unwrap();

    let mut seen = 0;
    for heat in lineup.heats() {
        assert_eq!(heat.len(), 3);
        for car in heat.into_iter().flatten() {
            assert!(cars.iter().any(|c| std::ptr::eq(c, car)));
            assert!((1..=6).contains(&car.number));
            seen += 1;
        }
    }
    assert_eq!(seen, 12);
}

#[test]
fn validation_failures_are_specific() {
    let options = ScheduleOptions::new(4, 3);
    let none: [&str; 0] = [];
    assert_eq!(
        schedule_heats(&none, &options).unwrap_err(),
        InputError::NoRacers
    );
    assert_eq!(
        schedule_heats(&["a"], &ScheduleOptions::new(0, 3)).unwrap_err(),
        InputError::InvalidLanes
    );
    assert_eq!(
        schedule_heats(&["a"], &ScheduleOptions::new(4, 0)).unwrap_err(),
        InputError::InvalidHeatsPerRacer
    );

    let not_list = ScheduleRequest::from_json(&json!({
        "racers": {"a": 1}, "lanes": 4, "heatsPerRacer": 3
    }));
    assert_eq!(not_list.unwrap_err(), InputError::NotAList);

    let messages = [
        InputError::NotAList.to_string(),
        InputError::NoRacers.to_string(),
        InputError::InvalidLanes.to_string(),
        InputError::InvalidHeatsPerRacer.to_string(),
    ];
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn json_request_end_to_end() {
    let request = ScheduleRequest::from_json_str(
        r#"{
            "racers": ["Ada", "Bo", "Cy", "Di", "Ed"],
            "lanes": 4,
            "heatsPerRacer": 3,
            "priority": "turnover"
        }"#,
    )
    .unwrap();
    let lineup = request.schedule().unwrap();
    assert_eq!(lineup.heat_count(), 4);

    let ada = json!("Ada");
    let runs = lineup
        .heats()
        .into_iter()
        .flatten()
        .filter(|slot| *slot == Some(&ada))
        .count();
    assert_eq!(runs, 3);

    let schedule = lineup.into_schedule();
    assert_eq!(
        schedule.cells().filter(|(_, _, s)| *s == Slot::Bye).count(),
        1
    );
}
