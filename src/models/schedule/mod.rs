//! Scheduled item model.
//!
//! A scheduled item places one activity on a weekend day at a start time.
//! Only the local hour and minute of `start_iso` carry meaning; the calendar
//! date is whatever "today" was when the item was created or last moved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::day::Day;
use crate::utils::date::local_hour_minute;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItem {
    pub id: String,
    pub activity_id: String,
    pub day: Day,
    #[serde(rename = "startISO")]
    pub start_iso: DateTime<Utc>,
    pub duration_minutes: u32,
}

impl ScheduledItem {
    pub fn new(
        id: impl Into<String>,
        activity_id: impl Into<String>,
        day: Day,
        start_iso: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            activity_id: activity_id.into(),
            day,
            start_iso,
            duration_minutes,
        }
    }

    /// Same as [`ScheduledItem::new`] with a generated id.
    pub fn with_generated_id(
        activity_id: impl Into<String>,
        day: Day,
        start_iso: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Self {
        Self::new(
            Uuid::new_v4().to_string(),
            activity_id,
            day,
            start_iso,
            duration_minutes,
        )
    }

    /// Local (hour, minute) the item starts at.
    pub fn start_time(&self) -> (u32, u32) {
        local_hour_minute(&self.start_iso)
    }
}
