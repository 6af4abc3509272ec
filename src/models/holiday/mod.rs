// Holiday model
// Calendar holidays and the long-weekend suggestions derived from them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::day::Day;
use crate::models::settings::WeekendType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    Federal,
    State,
    Observance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
}

impl Holiday {
    pub fn new(name: impl Into<String>, date: NaiveDate, kind: HolidayKind) -> Self {
        Self {
            name: name.into(),
            date,
            kind,
        }
    }

    /// Federal holiday from a (year, month, day) triple; `None` if the date is invalid.
    pub fn federal(name: &str, year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self::new(name, date, HolidayKind::Federal))
    }
}

/// A recommendation to switch the weekend type around an upcoming holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongWeekendSuggestion {
    pub id: String,
    pub holiday: Holiday,
    pub weekend_type: WeekendType,
    pub date_range: String,
    pub days: Vec<Day>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
