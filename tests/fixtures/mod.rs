// Test fixtures - reusable test data
// Provides consistent plans and placements across all test files
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use weekendly::models::activity::{Activity, ActivityCategory};
use weekendly::models::day::Day;
use weekendly::models::schedule::ScheduledItem;
use weekendly::models::state::WeekendlyState;
use weekendly::utils::date::at_local_time;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Jan 1 2024
    pub fn new_year_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Saturday, Jun 8 2024
    pub fn summer_saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 8).unwrap()
    }

    pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        at_local_time(summer_saturday(), hour, minute)
    }
}

/// Sample activities for testing
pub mod activities {
    use super::*;

    pub fn run() -> Activity {
        Activity::builder()
            .id("a1")
            .title("Run")
            .category(ActivityCategory::Outdoor)
            .duration_minutes(60)
            .build()
            .unwrap()
    }

    pub fn brunch() -> Activity {
        Activity::builder()
            .id("a2")
            .title("Brunch")
            .category(ActivityCategory::Food)
            .duration_minutes(90)
            .build()
            .unwrap()
    }

    /// No category or duration set.
    pub fn nap() -> Activity {
        Activity::new("a3", "Nap")
    }
}

pub fn placement(id: &str, activity_id: &str, day: Day, hour: u32) -> ScheduledItem {
    ScheduledItem::new(id, activity_id, day, dates::at(hour, 0), 60)
}

/// Three activities, four placements across both standard days.
pub fn busy_weekend() -> WeekendlyState {
    let mut state = WeekendlyState::default();
    for activity in [activities::run(), activities::brunch(), activities::nap()] {
        state.activities.insert(activity.id.clone(), activity);
    }
    state.schedule = vec![
        placement("s1", "a1", Day::saturday(), 8),
        placement("s2", "a2", Day::saturday(), 11),
        placement("s3", "a3", Day::sunday(), 14),
        placement("s4", "a1", Day::sunday(), 9),
    ];
    state
}
