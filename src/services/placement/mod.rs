//! Turning drop gestures and edit forms into schedule actions.
//!
//! A drop carries what was dragged (an activity from the catalogue or an
//! existing card), the droppable it landed on and the pointer position. The
//! pointer is converted to a time of day on the target column and combined
//! with today's date.

use chrono::NaiveDate;

use crate::models::activity::{duration_from_input, Activity};
use crate::models::day::Day;
use crate::models::schedule::ScheduledItem;
use crate::services::store::Action;
use crate::services::timeline::offset_to_time;
use crate::utils::date::{at_local_time, parse_hour_minute};

/// Droppable ids for day columns look like `day-saturday`.
pub const DAY_TARGET_PREFIX: &str = "day-";

/// What is being dragged.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    /// A catalogue activity; dropping it creates a new placement.
    Activity(Activity),
    /// An existing placement; dropping it moves it.
    ScheduledItem(ScheduledItem),
}

/// Where the day column sits on screen when the drop happens.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColumnGeometry {
    /// Top edge of the column in viewport coordinates.
    pub top: f32,
    /// How far the column's timeline is scrolled.
    pub scroll_top: f32,
}

/// A finished drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub payload: Option<DragPayload>,
    /// Droppable id under the pointer, `None` when dropped outside any target.
    pub target: Option<String>,
    /// Pointer Y in viewport coordinates.
    pub pointer_y: f32,
    pub column: ColumnGeometry,
}

impl DropEvent {
    pub fn new(payload: DragPayload, day: &Day, pointer_y: f32, column: ColumnGeometry) -> Self {
        Self {
            payload: Some(payload),
            target: Some(day_target_id(day)),
            pointer_y,
            column,
        }
    }

    /// Pointer position relative to the top of the (scrolled) timeline.
    pub fn timeline_offset(&self) -> f32 {
        self.pointer_y - self.column.top + self.column.scroll_top
    }
}

pub fn day_target_id(day: &Day) -> String {
    format!("{}{}", DAY_TARGET_PREFIX, day.id())
}

/// Day named by a droppable id, if it is a day column.
pub fn parse_day_target(target: &str) -> Option<Day> {
    target
        .strip_prefix(DAY_TARGET_PREFIX)
        .filter(|id| !id.is_empty())
        .map(Day::new)
}

/// Resolve a drop into the action it implies, using `today` as the date part
/// of the new start time. Drops outside a day column or without a payload
/// resolve to nothing.
pub fn resolve_drop(event: &DropEvent, today: NaiveDate) -> Option<Action> {
    let Some(day) = event.target.as_deref().and_then(parse_day_target) else {
        log::debug!("Drop ignored: no day column under pointer");
        return None;
    };
    let Some(payload) = event.payload.as_ref() else {
        log::debug!("Drop ignored: nothing was dragged");
        return None;
    };

    let time = offset_to_time(event.timeline_offset());
    let start_iso = at_local_time(today, time.hour, time.minute);

    let action = match payload {
        DragPayload::ScheduledItem(item) => Action::MoveScheduleItem {
            id: item.id.clone(),
            start_iso,
            day,
            duration_minutes: None,
        },
        DragPayload::Activity(activity) => Action::ScheduleItem(ScheduledItem::with_generated_id(
            activity.id.clone(),
            day,
            start_iso,
            activity.default_duration(),
        )),
    };

    log::debug!(
        "Drop resolved to {} at {:02}:{:02}",
        action.name(),
        time.hour,
        time.minute
    );
    Some(action)
}

/// Build the move for a card's edit form (`HH:MM` start, day, duration text).
/// Returns `None` when the time cannot be parsed.
pub fn reschedule_from_form(
    item: &ScheduledItem,
    start_time: &str,
    day: Day,
    duration_input: &str,
    today: NaiveDate,
) -> Option<Action> {
    let (hour, minute) = parse_hour_minute(start_time)?;

    Some(Action::MoveScheduleItem {
        id: item.id.clone(),
        start_iso: at_local_time(today, hour, minute),
        day,
        duration_minutes: Some(duration_from_input(duration_input)),
    })
}
