// Settings module
// UI preferences persisted alongside the plan

use serde::{Deserialize, Serialize};

use crate::models::day::Day;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Lazy,
    Adventurous,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Lazy => "lazy",
            Self::Adventurous => "adventurous",
        }
    }

    /// Unknown or empty theme names fall back to `Default`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "lazy" => Self::Lazy,
            "adventurous" => Self::Adventurous,
            _ => Self::Default,
        }
    }
}

/// Which days make up the weekend being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeekendType {
    #[default]
    Standard,
    LongFriday,
    LongMonday,
    Custom,
}

impl WeekendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::LongFriday => "long-friday",
            Self::LongMonday => "long-monday",
            Self::Custom => "custom",
        }
    }

    /// Unknown names are treated as a standard weekend.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim() {
            "long-friday" => Self::LongFriday,
            "long-monday" => Self::LongMonday,
            "custom" => Self::Custom,
            _ => Self::Standard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Weekend (Sat–Sun)",
            Self::LongFriday => "Long Weekend (Fri–Sun)",
            Self::LongMonday => "Long Weekend (Sat–Mon)",
            Self::Custom => "Custom Days",
        }
    }
}

/// Preferences stored under `ui` in the persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferences {
    pub theme: Theme,
    pub weekend_type: WeekendType,
    /// Only consulted when `weekend_type` is `Custom`.
    pub custom_days: Vec<Day>,
    /// Append-only; the same id may appear more than once.
    pub dismissed_holiday_suggestions: Vec<String>,
}

impl UiPreferences {
    pub fn is_dismissed(&self, suggestion_id: &str) -> bool {
        self.dismissed_holiday_suggestions
            .iter()
            .any(|id| id == suggestion_id)
    }
}
