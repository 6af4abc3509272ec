//! Day identifiers for weekend columns.
//!
//! Days are an open domain: the four well-known weekend days have a fixed
//! display order and label, while any other name is accepted as a custom day
//! and sorts after them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort key given to day names that are not one of the known weekend days.
pub const CUSTOM_DAY_ORDER: u32 = 999;

const KNOWN_DAYS: [(&str, &str, u32); 4] = [
    ("friday", "Friday", 0),
    ("saturday", "Saturday", 1),
    ("sunday", "Sunday", 2),
    ("monday", "Monday", 3),
];

/// A weekend day identifier such as `saturday`, or a custom name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Day(String);

impl Day {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn friday() -> Self {
        Self::new("friday")
    }

    pub fn saturday() -> Self {
        Self::new("saturday")
    }

    pub fn sunday() -> Self {
        Self::new("sunday")
    }

    pub fn monday() -> Self {
        Self::new("monday")
    }

    /// Raw identifier as stored in the schedule.
    pub fn id(&self) -> &str {
        &self.0
    }

    /// Whether this is one of friday/saturday/sunday/monday.
    pub fn is_known(&self) -> bool {
        KNOWN_DAYS.iter().any(|(id, _, _)| *id == self.0)
    }

    /// Display order: friday=0, saturday=1, sunday=2, monday=3, custom days last.
    pub fn order(&self) -> u32 {
        KNOWN_DAYS
            .iter()
            .find(|(id, _, _)| *id == self.0)
            .map(|(_, _, order)| *order)
            .unwrap_or(CUSTOM_DAY_ORDER)
    }

    /// Human readable label. Custom names get their first letter upper-cased.
    pub fn label(&self) -> String {
        if let Some((_, label, _)) = KNOWN_DAYS.iter().find(|(id, _, _)| *id == self.0) {
            return (*label).to_string();
        }

        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Day {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Day {
    fn from(value: String) -> Self {
        Self(value)
    }
}
