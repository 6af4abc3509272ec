// Weekend calendar policy
// Maps a weekend type to the day columns shown on the schedule

use crate::models::day::Day;
use crate::models::settings::{UiPreferences, WeekendType};

/// Day identifiers that make up the weekend, in policy order.
pub fn resolve_days(weekend_type: WeekendType, custom_days: &[Day]) -> Vec<Day> {
    match weekend_type {
        WeekendType::Standard => vec![Day::saturday(), Day::sunday()],
        WeekendType::LongFriday => vec![Day::friday(), Day::saturday(), Day::sunday()],
        WeekendType::LongMonday => vec![Day::saturday(), Day::sunday(), Day::monday()],
        WeekendType::Custom if !custom_days.is_empty() => custom_days.to_vec(),
        WeekendType::Custom => vec![Day::saturday(), Day::sunday()],
    }
}

/// Same as [`resolve_days`] for a raw weekend type name; unknown names
/// resolve like a standard weekend.
pub fn resolve_days_by_name(weekend_type: &str, custom_days: &[Day]) -> Vec<Day> {
    resolve_days(WeekendType::parse_lenient(weekend_type), custom_days)
}

/// Sort days into display order. Custom days keep their relative order.
pub fn ordered_days(days: &[Day]) -> Vec<Day> {
    let mut sorted = days.to_vec();
    sorted.sort_by_key(Day::order);
    sorted
}

/// Ordered day columns for the current preferences.
pub fn visible_days(ui: &UiPreferences) -> Vec<Day> {
    ordered_days(&resolve_days(ui.weekend_type, &ui.custom_days))
}
