//! Long-weekend suggestions.
//!
//! Scans a fixed holiday table for holidays within the next six months that
//! fall on a Friday or a Monday, and proposes the three-day weekend that
//! includes them:
//!
//! * Friday holiday: `long-monday` weekend, Saturday through Monday.
//! * Monday holiday: `long-friday` weekend, Friday through Sunday.
//!
//! Suggestions the user dismissed are filtered out and the rest are sorted by
//! start date, soonest first.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, Weekday};

use crate::models::day::Day;
use crate::models::holiday::{Holiday, LongWeekendSuggestion};
use crate::models::settings::WeekendType;
use crate::services::store::Action;

/// How far ahead holidays are considered.
pub const LOOK_AHEAD_MONTHS: u32 = 6;

const US_FEDERAL_HOLIDAYS: &[(&str, i32, u32, u32)] = &[
    ("New Year's Day", 2024, 1, 1),
    ("Martin Luther King Jr. Day", 2024, 1, 15),
    ("Presidents' Day", 2024, 2, 19),
    ("Memorial Day", 2024, 5, 27),
    ("Independence Day", 2024, 7, 4),
    ("Labor Day", 2024, 9, 2),
    ("Columbus Day", 2024, 10, 14),
    ("Veterans Day", 2024, 11, 11),
    ("Thanksgiving Day", 2024, 11, 28),
    ("Christmas Day", 2024, 12, 25),
    ("New Year's Day", 2025, 1, 1),
    ("Martin Luther King Jr. Day", 2025, 1, 20),
    ("Presidents' Day", 2025, 2, 17),
    ("Memorial Day", 2025, 5, 26),
    ("Independence Day", 2025, 7, 4),
    ("Labor Day", 2025, 9, 1),
    ("Columbus Day", 2025, 10, 13),
    ("Veterans Day", 2025, 11, 11),
    ("Thanksgiving Day", 2025, 11, 27),
    ("Christmas Day", 2025, 12, 25),
    ("New Year's Day", 2026, 1, 1),
    ("Martin Luther King Jr. Day", 2026, 1, 19),
    ("Presidents' Day", 2026, 2, 16),
    ("Memorial Day", 2026, 5, 25),
    ("Independence Day", 2026, 7, 4),
    ("Labor Day", 2026, 9, 7),
    ("Columbus Day", 2026, 10, 12),
    ("Veterans Day", 2026, 11, 11),
    ("Thanksgiving Day", 2026, 11, 26),
    ("Christmas Day", 2026, 12, 25),
    ("New Year's Day", 2027, 1, 1),
    ("Martin Luther King Jr. Day", 2027, 1, 18),
    ("Presidents' Day", 2027, 2, 15),
    ("Memorial Day", 2027, 5, 31),
    ("Independence Day", 2027, 7, 4),
    ("Labor Day", 2027, 9, 6),
    ("Columbus Day", 2027, 10, 11),
    ("Veterans Day", 2027, 11, 11),
    ("Thanksgiving Day", 2027, 11, 25),
    ("Christmas Day", 2027, 12, 25),
];

/// The holiday table suggestions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::us_federal()
    }
}

impl HolidayCalendar {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    /// Built-in US federal holidays.
    pub fn us_federal() -> Self {
        let holidays = US_FEDERAL_HOLIDAYS
            .iter()
            .filter_map(|(name, year, month, day)| Holiday::federal(name, *year, *month, *day))
            .collect();
        Self { holidays }
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Suggestions for holidays after `today` and before the look-ahead
    /// horizon, minus dismissed ids, soonest first.
    pub fn upcoming_long_weekends(
        &self,
        today: NaiveDate,
        dismissed: &[String],
    ) -> Vec<LongWeekendSuggestion> {
        let horizon = today
            .checked_add_months(Months::new(LOOK_AHEAD_MONTHS))
            .unwrap_or(NaiveDate::MAX);

        let mut suggestions: Vec<LongWeekendSuggestion> = self
            .holidays
            .iter()
            .filter(|holiday| holiday.date > today && holiday.date < horizon)
            .filter_map(suggestion_for)
            .filter(|suggestion| !dismissed.iter().any(|id| *id == suggestion.id))
            .collect();

        suggestions.sort_by_key(|suggestion| suggestion.start_date);
        suggestions
    }

    pub fn next_suggestion(
        &self,
        today: NaiveDate,
        dismissed: &[String],
    ) -> Option<LongWeekendSuggestion> {
        self.upcoming_long_weekends(today, dismissed)
            .into_iter()
            .next()
    }
}

/// Upcoming suggestions from the built-in table, relative to the local date.
pub fn upcoming_long_weekends(dismissed: &[String]) -> Vec<LongWeekendSuggestion> {
    HolidayCalendar::default().upcoming_long_weekends(Local::now().date_naive(), dismissed)
}

/// The soonest suggestion from the built-in table, if any.
pub fn next_long_weekend_suggestion(dismissed: &[String]) -> Option<LongWeekendSuggestion> {
    HolidayCalendar::default().next_suggestion(Local::now().date_naive(), dismissed)
}

/// Long weekend created by `holiday`, if it lands on a Friday or Monday.
pub fn suggestion_for(holiday: &Holiday) -> Option<LongWeekendSuggestion> {
    let (weekend_type, suffix, start, end, days) = match holiday.date.weekday() {
        Weekday::Fri => (
            WeekendType::LongMonday,
            "monday",
            holiday.date + Duration::days(1),
            holiday.date + Duration::days(3),
            vec![Day::saturday(), Day::sunday(), Day::monday()],
        ),
        Weekday::Mon => (
            WeekendType::LongFriday,
            "friday",
            holiday.date - Duration::days(3),
            holiday.date - Duration::days(1),
            vec![Day::friday(), Day::saturday(), Day::sunday()],
        ),
        _ => return None,
    };

    Some(LongWeekendSuggestion {
        id: format!("long-weekend-{}-{}", holiday.date.format("%Y-%m-%d"), suffix),
        holiday: holiday.clone(),
        weekend_type,
        date_range: format_date_range(start, end),
        days,
        start_date: start,
        end_date: end,
    })
}

/// Compact display range, e.g. `Jan 12–14, 2024`, `Aug 30–Sep 1, 2024`,
/// `Dec 31, 2027–Jan 2, 2028`.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() == end.year() && start.month() == end.month() {
        format!("{}–{}, {}", start.format("%b %-d"), end.day(), start.year())
    } else if start.year() == end.year() {
        format!(
            "{}–{}, {}",
            start.format("%b %-d"),
            end.format("%b %-d"),
            start.year()
        )
    } else {
        format!("{}–{}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
    }
}

/// Actions for accepting a suggestion: switch the weekend type, then dismiss it.
pub fn apply_actions(suggestion: &LongWeekendSuggestion) -> [Action; 2] {
    [
        Action::SetWeekendType(suggestion.weekend_type),
        dismiss_action(suggestion),
    ]
}

pub fn dismiss_action(suggestion: &LongWeekendSuggestion) -> Action {
    Action::DismissHolidaySuggestion(suggestion.id.clone())
}
