//! Geometry of the vertical day timeline.
//!
//! A day column is `24 * PIXELS_PER_HOUR` pixels tall with midnight at the top.
//! These helpers convert between wall-clock time and pixel offsets.

use chrono::{DateTime, Utc};

use crate::utils::date::local_hour_minute;

/// Vertical scale of the timeline (one pixel per minute).
pub const PIXELS_PER_HOUR: f32 = 60.0;
/// Full height of a day column.
pub const DAY_PIXEL_HEIGHT: f32 = 24.0 * PIXELS_PER_HOUR;
/// Smallest height a scheduled card is drawn with.
pub const MIN_CARD_HEIGHT: f32 = 70.0;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Wall-clock position on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Pixel offset from the top of the column for `hour:minute`.
pub fn minutes_to_offset(hour: u32, minute: u32) -> f32 {
    (hour * 60 + minute) as f32 * PIXELS_PER_HOUR / 60.0
}

/// Pixel offset for the local time of `timestamp`. Not clamped.
pub fn time_to_offset(timestamp: &DateTime<Utc>) -> f32 {
    let (hour, minute) = local_hour_minute(timestamp);
    minutes_to_offset(hour, minute)
}

/// Height of a block lasting `minutes`. Zero or negative input gives a
/// non-positive height; see [`card_layout`] for the rendered height.
pub fn duration_to_height(minutes: i64) -> f32 {
    minutes as f32 * PIXELS_PER_HOUR / 60.0
}

/// Time of day under a pixel offset.
///
/// Offsets above the column snap to 00:00 and offsets at or past the bottom
/// snap to 23:59.
pub fn offset_to_time(offset: f32) -> TimeOfDay {
    if !offset.is_finite() {
        return if offset > 0.0 {
            TimeOfDay::new(23, 59)
        } else {
            TimeOfDay::new(0, 0)
        };
    }

    let total_minutes = (offset * 60.0 / PIXELS_PER_HOUR).floor() as i64;
    let clamped = total_minutes.clamp(0, MINUTES_PER_DAY - 1);

    TimeOfDay::new((clamped / 60) as u32, (clamped % 60) as u32)
}

/// Position and size of a scheduled card inside its day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub top: f32,
    pub height: f32,
}

/// Lay out a card: at least [`MIN_CARD_HEIGHT`] tall, but never past midnight.
pub fn card_layout(start: &DateTime<Utc>, duration_minutes: u32) -> CardLayout {
    let top = time_to_offset(start);
    let height = duration_to_height(duration_minutes as i64).max(MIN_CARD_HEIGHT);

    CardLayout {
        top,
        height: height.min(DAY_PIXEL_HEIGHT - top),
    }
}

/// Hour marker label for the column gutter, e.g. `12:00 AM`, `3:00 PM`.
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        12 => "12:00 PM".to_string(),
        h if h < 12 => format!("{}:00 AM", h),
        h => format!("{}:00 PM", h - 12),
    }
}
