//! The single point of mutation for a weekend plan.
//!
//! [`apply`] is a pure transition function: it borrows the current state and
//! returns a new value, so anyone still holding the previous state (for change
//! detection, undo, a pending write) keeps seeing it unchanged. [`Store`]
//! wraps it with the current state and a revision counter.

use chrono::{DateTime, Utc};

use crate::models::activity::Activity;
use crate::models::day::Day;
use crate::models::schedule::ScheduledItem;
use crate::models::settings::{Theme, WeekendType};
use crate::models::state::WeekendlyState;

/// Every transition the plan supports.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Insert or overwrite `activities[activity.id]`.
    AddActivity(Activity),
    /// Replace an existing activity; ignored when the id is unknown.
    UpdateActivity(Activity),
    /// Remove an activity and every scheduled item that references it.
    DeleteActivity { id: String },
    /// Append a placement to the schedule.
    ScheduleItem(ScheduledItem),
    UnscheduleItem { id: String },
    /// Partial update of one placement. A `None` duration keeps the current one.
    MoveScheduleItem {
        id: String,
        start_iso: DateTime<Utc>,
        day: Day,
        duration_minutes: Option<u32>,
    },
    SetTheme(Theme),
    SetWeekendType(WeekendType),
    SetCustomDays(Vec<Day>),
    /// Append to the dismissal list. Duplicates are kept.
    DismissHolidaySuggestion(String),
    /// Replace the whole state (startup hydration).
    LoadState(Box<WeekendlyState>),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddActivity(_) => "ADD_ACTIVITY",
            Self::UpdateActivity(_) => "UPDATE_ACTIVITY",
            Self::DeleteActivity { .. } => "DELETE_ACTIVITY",
            Self::ScheduleItem(_) => "SCHEDULE_ITEM",
            Self::UnscheduleItem { .. } => "UNSCHEDULE_ITEM",
            Self::MoveScheduleItem { .. } => "MOVE_SCHEDULE_ITEM",
            Self::SetTheme(_) => "SET_THEME",
            Self::SetWeekendType(_) => "SET_WEEKEND_TYPE",
            Self::SetCustomDays(_) => "SET_CUSTOM_DAYS",
            Self::DismissHolidaySuggestion(_) => "DISMISS_HOLIDAY_SUGGESTION",
            Self::LoadState(_) => "LOAD_STATE",
        }
    }
}

/// Compute the state that follows `state` after `action`.
pub fn apply(state: &WeekendlyState, action: Action) -> WeekendlyState {
    match action {
        Action::AddActivity(activity) => {
            let mut next = state.clone();
            next.activities.insert(activity.id.clone(), activity);
            next
        }
        Action::UpdateActivity(activity) => {
            if !state.activities.contains_key(&activity.id) {
                return state.clone();
            }
            let mut next = state.clone();
            next.activities.insert(activity.id.clone(), activity);
            next
        }
        Action::DeleteActivity { id } => {
            let mut next = state.clone();
            next.activities.remove(&id);
            next.schedule.retain(|item| item.activity_id != id);
            next
        }
        Action::ScheduleItem(item) => {
            let mut next = state.clone();
            next.schedule.push(item);
            next
        }
        Action::UnscheduleItem { id } => {
            let mut next = state.clone();
            next.schedule.retain(|item| item.id != id);
            next
        }
        Action::MoveScheduleItem {
            id,
            start_iso,
            day,
            duration_minutes,
        } => {
            let mut next = state.clone();
            if let Some(item) = next.schedule.iter_mut().find(|item| item.id == id) {
                item.start_iso = start_iso;
                item.day = day;
                if let Some(minutes) = duration_minutes {
                    item.duration_minutes = minutes;
                }
            }
            next
        }
        Action::SetTheme(theme) => {
            let mut next = state.clone();
            next.ui.theme = theme;
            next
        }
        Action::SetWeekendType(weekend_type) => {
            let mut next = state.clone();
            next.ui.weekend_type = weekend_type;
            next
        }
        Action::SetCustomDays(days) => {
            let mut next = state.clone();
            next.ui.custom_days = days;
            next
        }
        Action::DismissHolidaySuggestion(id) => {
            let mut next = state.clone();
            next.ui.dismissed_holiday_suggestions.push(id);
            next
        }
        Action::LoadState(loaded) => *loaded,
    }
}

/// Owns the current plan and funnels every change through [`apply`].
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: WeekendlyState,
    revision: u64,
}

impl Store {
    pub fn new(state: WeekendlyState) -> Self {
        Self { state, revision: 0 }
    }

    pub fn state(&self) -> &WeekendlyState {
        &self.state
    }

    /// Incremented on every dispatch that changed the state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply `action`; returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let name = action.name();
        let next = apply(&self.state, action);
        if next == self.state {
            log::debug!("{} left the plan unchanged", name);
            return false;
        }

        self.state = next;
        self.revision += 1;
        log::debug!("{} -> revision {}", name, self.revision);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::today_at;
    use pretty_assertions::assert_eq;

    fn run() -> Activity {
        let mut activity = Activity::new("a1", "Run");
        activity.duration_minutes = Some(60);
        activity
    }

    fn item(id: &str, activity_id: &str, day: Day) -> ScheduledItem {
        ScheduledItem::new(id, activity_id, day, today_at(9, 0), 60)
    }

    #[test]
    fn test_add_activity_inserts_and_overwrites() {
        let state = apply(&WeekendlyState::default(), Action::AddActivity(run()));
        assert_eq!(state.activities.len(), 1);

        let mut renamed = run();
        renamed.title = "Long run".into();
        let state = apply(&state, Action::AddActivity(renamed));
        assert_eq!(state.activities.len(), 1);
        assert_eq!(state.activities["a1"].title, "Long run");
    }

    #[test]
    fn test_update_activity_replaces_existing_only() {
        let state = apply(&WeekendlyState::default(), Action::AddActivity(run()));

        let mut updated = Activity::new("a1", "Jog");
        updated.notes = Some("slow".into());
        let state = apply(&state, Action::UpdateActivity(updated.clone()));
        assert_eq!(state.activities["a1"], updated);

        let unknown = apply(&state, Action::UpdateActivity(Activity::new("zz", "Ghost")));
        assert_eq!(unknown, state);
    }

    #[test]
    fn test_delete_activity_cascades_to_schedule() {
        let mut state = WeekendlyState::default();
        state.activities.insert("a1".into(), run());
        state.activities.insert("a2".into(), Activity::new("a2", "Brunch"));
        state.schedule = vec![
            item("s1", "a1", Day::saturday()),
            item("s2", "a2", Day::saturday()),
            item("s3", "a1", Day::sunday()),
        ];

        let next = apply(&state, Action::DeleteActivity { id: "a1".into() });
        assert!(!next.activities.contains_key("a1"));
        assert!(next.activities.contains_key("a2"));
        let ids: Vec<_> = next.schedule.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s2"]);
    }

    #[test]
    fn test_schedule_and_unschedule() {
        let state = apply(&WeekendlyState::default(), Action::AddActivity(run()));
        let state = apply(&state, Action::ScheduleItem(item("s1", "a1", Day::saturday())));
        assert_eq!(state.schedule.len(), 1);
        assert_eq!(state.activities.len(), 1);

        let state = apply(&state, Action::UnscheduleItem { id: "s1".into() });
        assert!(state.schedule.is_empty());
        assert_eq!(state.activities.len(), 1);
    }

    #[test]
    fn test_schedule_keeps_insertion_order_and_overlaps() {
        let mut state = WeekendlyState::default();
        for id in ["s3", "s1", "s2"] {
            state = apply(&state, Action::ScheduleItem(item(id, "a1", Day::saturday())));
        }
        let ids: Vec<_> = state.schedule.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s3", "s1", "s2"]);
    }

    #[test]
    fn test_move_updates_only_targeted_fields() {
        let mut state = WeekendlyState::default();
        state.schedule.push(item("s1", "a1", Day::saturday()));
        state.schedule.push(item("s2", "a1", Day::saturday()));

        let new_start = today_at(15, 30);
        let next = apply(
            &state,
            Action::MoveScheduleItem {
                id: "s1".into(),
                start_iso: new_start,
                day: Day::sunday(),
                duration_minutes: Some(90),
            },
        );

        let moved = next.scheduled_item("s1").unwrap();
        assert_eq!(moved.id, "s1");
        assert_eq!(moved.activity_id, "a1");
        assert_eq!(moved.day, Day::sunday());
        assert_eq!(moved.duration_minutes, 90);
        assert_eq!(moved.start_iso, new_start);
        assert_eq!(next.scheduled_item("s2"), state.scheduled_item("s2"));
    }

    #[test]
    fn test_move_without_duration_keeps_existing() {
        let mut state = WeekendlyState::default();
        state.schedule.push(ScheduledItem::new("s1", "a1", Day::saturday(), today_at(9, 0), 45));

        let next = apply(
            &state,
            Action::MoveScheduleItem {
                id: "s1".into(),
                start_iso: today_at(11, 0),
                day: Day::monday(),
                duration_minutes: None,
            },
        );
        assert_eq!(next.schedule[0].duration_minutes, 45);
        assert_eq!(next.schedule[0].day, Day::monday());
    }

    #[test]
    fn test_move_unknown_item_is_noop() {
        let mut state = WeekendlyState::default();
        state.schedule.push(item("s1", "a1", Day::saturday()));
        let next = apply(
            &state,
            Action::MoveScheduleItem {
                id: "missing".into(),
                start_iso: today_at(1, 0),
                day: Day::sunday(),
                duration_minutes: Some(10),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_ui_preference_actions() {
        let state = WeekendlyState::default();
        let state = apply(&state, Action::SetTheme(Theme::Adventurous));
        let state = apply(&state, Action::SetWeekendType(WeekendType::Custom));
        let state = apply(&state, Action::SetCustomDays(vec![Day::friday(), Day::new("tuesday")]));

        assert_eq!(state.ui.theme, Theme::Adventurous);
        assert_eq!(state.ui.weekend_type, WeekendType::Custom);
        assert_eq!(state.ui.custom_days, vec![Day::friday(), Day::new("tuesday")]);
    }

    #[test]
    fn test_dismissals_accumulate_with_duplicates() {
        let state = WeekendlyState::default();
        let state = apply(&state, Action::DismissHolidaySuggestion("h1".into()));
        let state = apply(&state, Action::DismissHolidaySuggestion("h1".into()));
        assert_eq!(state.ui.dismissed_holiday_suggestions, vec!["h1", "h1"]);
    }

    #[test]
    fn test_load_state_replaces_everything() {
        let before = apply(&WeekendlyState::default(), Action::AddActivity(run()));
        let mut loaded = WeekendlyState::default();
        loaded.ui.weekend_type = WeekendType::LongMonday;

        let after = apply(&before, Action::LoadState(Box::new(loaded.clone())));
        assert_eq!(after, loaded);
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let state = apply(&WeekendlyState::default(), Action::AddActivity(run()));
        let snapshot = state.clone();

        let _ = apply(&state, Action::DeleteActivity { id: "a1".into() });
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_store_dispatch_tracks_revisions() {
        let mut store = Store::default();
        assert!(store.dispatch(Action::AddActivity(run())));
        assert_eq!(store.revision(), 1);

        // Same payload again: nothing changes.
        assert!(!store.dispatch(Action::AddActivity(run())));
        assert_eq!(store.revision(), 1);

        assert!(store.dispatch(Action::DeleteActivity { id: "a1".into() }));
        assert_eq!(store.revision(), 2);
        assert!(store.state().activities.is_empty());
    }
}
