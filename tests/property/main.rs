// Property-based tests for timeline geometry and plan transitions
// Exercises the invariants with random inputs

#[path = "../fixtures/mod.rs"]
mod fixtures;

use proptest::prelude::*;
use weekendly::models::day::Day;
use weekendly::models::schedule::ScheduledItem;
use weekendly::models::settings::WeekendType;
use weekendly::models::state::WeekendlyState;
use weekendly::services::store::{apply, Action};
use weekendly::services::timeline::{minutes_to_offset, offset_to_time, DAY_PIXEL_HEIGHT};
use weekendly::services::weekend::resolve_days;

fn any_day() -> impl Strategy<Value = Day> {
    prop_oneof![
        Just(Day::friday()),
        Just(Day::saturday()),
        Just(Day::sunday()),
        Just(Day::monday()),
        "[a-z]{3,8}".prop_map(Day::new),
    ]
}

/// A plan with up to 5 activities and 12 placements, some of them dangling.
fn any_state() -> impl Strategy<Value = WeekendlyState> {
    (
        1usize..=5,
        prop::collection::vec((0usize..7, any_day(), 0u32..24, 1u32..240), 0..12),
    )
        .prop_map(|(activity_count, placements)| {
            let mut state = WeekendlyState::default();
            for n in 0..activity_count {
                let id = format!("a{}", n);
                state.activities.insert(
                    id.clone(),
                    weekendly::models::activity::Activity::new(id, format!("Activity {}", n)),
                );
            }
            state.schedule = placements
                .into_iter()
                .enumerate()
                .map(|(n, (activity, day, hour, duration))| {
                    ScheduledItem::new(
                        format!("s{}", n),
                        format!("a{}", activity),
                        day,
                        fixtures::dates::at(hour, 0),
                        duration,
                    )
                })
                .collect();
            state
        })
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..7).prop_map(|n| Action::DeleteActivity { id: format!("a{}", n) }),
        (0usize..12).prop_map(|n| Action::UnscheduleItem { id: format!("s{}", n) }),
        (0usize..12, any_day(), 0u32..24).prop_map(|(n, day, hour)| Action::MoveScheduleItem {
            id: format!("s{}", n),
            start_iso: fixtures::dates::at(hour, 15),
            day,
            duration_minutes: None,
        }),
        prop::collection::vec(any_day(), 0..4).prop_map(Action::SetCustomDays),
        "[a-z-]{1,12}".prop_map(Action::DismissHolidaySuggestion),
    ]
}

proptest! {
    #[test]
    fn prop_offset_round_trip(hour in 0u32..24, minute in 0u32..60) {
        let time = offset_to_time(minutes_to_offset(hour, minute));
        prop_assert_eq!((time.hour, time.minute), (hour, minute));
    }

    #[test]
    fn prop_offset_is_clamped(offset in -10_000.0f32..10_000.0) {
        let time = offset_to_time(offset);
        prop_assert!(time.hour < 24);
        prop_assert!(time.minute < 60);
        if offset <= 0.0 {
            prop_assert_eq!((time.hour, time.minute), (0, 0));
        }
        if offset >= DAY_PIXEL_HEIGHT {
            prop_assert_eq!((time.hour, time.minute), (23, 59));
        }
    }

    #[test]
    fn prop_standard_ignores_custom_days(days in prop::collection::vec(any_day(), 0..5)) {
        prop_assert_eq!(
            resolve_days(WeekendType::Standard, &days),
            vec![Day::saturday(), Day::sunday()]
        );
    }

    #[test]
    fn prop_delete_cascades_only_matching_items(state in any_state(), target in 0usize..7) {
        let id = format!("a{}", target);
        let next = apply(&state, Action::DeleteActivity { id: id.clone() });

        prop_assert!(!next.activities.contains_key(&id));
        prop_assert!(next.schedule.iter().all(|item| item.activity_id != id));

        let survivors: Vec<&ScheduledItem> = state
            .schedule
            .iter()
            .filter(|item| item.activity_id != id)
            .collect();
        let kept: Vec<&ScheduledItem> = next.schedule.iter().collect();
        prop_assert_eq!(kept, survivors);
    }

    #[test]
    fn prop_apply_is_pure(state in any_state(), action in any_action()) {
        let before = state.clone();
        let first = apply(&state, action.clone());
        let second = apply(&state, action);

        prop_assert_eq!(first, second);
        prop_assert_eq!(state, before);
    }
}
