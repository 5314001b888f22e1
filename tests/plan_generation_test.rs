use proptest::prelude::*;

use sprint_plan::models::{InjuryHistory, PlanRequest, Surface, TrainingLevel};
use sprint_plan::services::{build_sprint_plan, BaseParameters, LevelProfile};

fn level_strategy() -> impl Strategy<Value = TrainingLevel> {
    prop_oneof![
        Just(TrainingLevel::Beginner),
        Just(TrainingLevel::Intermediate),
        Just(TrainingLevel::Advanced),
    ]
}

fn surface_strategy() -> impl Strategy<Value = Surface> {
    prop_oneof![
        Just(Surface::Track),
        Just(Surface::Treadmill),
        Just(Surface::Field),
        Just(Surface::Pavement),
        Just(Surface::Other),
    ]
}

fn injury_strategy() -> impl Strategy<Value = InjuryHistory> {
    prop_oneof![
        Just(InjuryHistory::None),
        Just(InjuryHistory::Knees),
        Just(InjuryHistory::Hamstrings),
        Just(InjuryHistory::LowerBack),
        Just(InjuryHistory::Other),
    ]
}

prop_compose! {
    fn request_strategy()(
        age in 10.0f64..90.0,
        level in level_strategy(),
        days in 1.0f64..7.0,
        surface in surface_strategy(),
        injury in injury_strategy(),
    ) -> PlanRequest {
        PlanRequest { age, level, days, surface, injury }
    }
}

proptest! {
    #[test]
    fn plan_has_six_ordered_weeks(request in request_strategy()) {
        let plan = build_sprint_plan(&request);
        let weeks: Vec<u32> = plan.iter().map(|w| w.week).collect();
        prop_assert_eq!(weeks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn reps_step_up_every_two_weeks(request in request_strategy()) {
        let plan = build_sprint_plan(&request);
        let base = BaseParameters::resolve(&request);

        for week in &plan {
            prop_assert_eq!(week.reps, base.reps + (week.week - 1) / 2);
        }
        for pair in plan.windows(2) {
            prop_assert!(pair[1].reps >= pair[0].reps);
        }
    }

    #[test]
    fn rest_shrinks_but_never_below_floor(request in request_strategy()) {
        let plan = build_sprint_plan(&request);

        for week in &plan {
            prop_assert!(week.rest_seconds >= 45);
        }
        for pair in plan.windows(2) {
            prop_assert!(pair[1].rest_seconds <= pair[0].rest_seconds);
        }
    }

    #[test]
    fn rpe_rises_by_half_point(request in request_strategy()) {
        let plan = build_sprint_plan(&request);

        for pair in plan.windows(2) {
            prop_assert!((pair[1].rpe.value() - pair[0].rpe.value() - 0.5).abs() < 1e-9);
        }
        for week in &plan {
            let shown = week.rpe.to_string();
            let decimals = shown.split('.').nth(1).unwrap_or_default();
            prop_assert_eq!(decimals.len(), 1);
        }
    }

    #[test]
    fn plan_is_deterministic(request in request_strategy()) {
        prop_assert_eq!(build_sprint_plan(&request), build_sprint_plan(&request));
    }
}

#[test]
fn test_level_table() {
    assert_eq!(LevelProfile::for_level(TrainingLevel::Advanced).reps, 10);
    assert_eq!(LevelProfile::for_level(TrainingLevel::Advanced).rest_seconds, 60);
    assert_eq!(LevelProfile::for_level(TrainingLevel::Intermediate).rpe, 7.0);
    assert_eq!(LevelProfile::for_level(TrainingLevel::Beginner).rest_seconds, 90);
}

#[test]
fn test_focus_partitions_weeks() {
    let plan = build_sprint_plan(&PlanRequest::default());
    let labels: Vec<&str> = plan.iter().map(|w| w.focus.label()).collect();

    assert_eq!(&labels[0..2], ["Technique & acceleration"; 2]);
    assert_eq!(&labels[2..4], ["Speed & consistency"; 2]);
    assert_eq!(&labels[4..6], ["Peak speed & confidence"; 2]);
}
