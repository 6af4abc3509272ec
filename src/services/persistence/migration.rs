//! Reading persisted plans written by older versions.
//!
//! Early snapshots only stored `ui.theme`; the weekend type, custom days and
//! dismissal list were added later. Missing fields are backfilled with their
//! defaults before the state is handed to the store. Individual activities or
//! scheduled items that no longer parse are dropped on their own, so one bad
//! record does not discard the rest of the plan.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::activity::Activity;
use crate::models::day::Day;
use crate::models::schedule::ScheduledItem;
use crate::models::settings::{Theme, UiPreferences, WeekendType};
use crate::models::state::WeekendlyState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    #[serde(default)]
    activities: BTreeMap<String, Value>,
    #[serde(default)]
    schedule: Vec<Value>,
    #[serde(default)]
    ui: Option<PersistedUi>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedUi {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    weekend_type: Option<String>,
    #[serde(default)]
    custom_days: Option<Vec<Day>>,
    #[serde(default)]
    dismissed_holiday_suggestions: Option<Vec<String>>,
}

impl PersistedUi {
    fn migrate(self) -> UiPreferences {
        UiPreferences {
            theme: self
                .theme
                .as_deref()
                .map(Theme::parse_lenient)
                .unwrap_or_default(),
            weekend_type: self
                .weekend_type
                .as_deref()
                .map(WeekendType::parse_lenient)
                .unwrap_or_default(),
            custom_days: self.custom_days.unwrap_or_default(),
            dismissed_holiday_suggestions: self.dismissed_holiday_suggestions.unwrap_or_default(),
        }
    }
}

/// Parse a persisted JSON blob and bring it up to the current shape.
pub fn parse_persisted_state(raw: &str) -> Result<WeekendlyState> {
    let persisted: PersistedState =
        serde_json::from_str(raw).context("Failed to parse persisted state")?;

    let activities: BTreeMap<String, Activity> = persisted
        .activities
        .into_iter()
        .filter_map(|(id, raw)| {
            let activity = parse_entry::<Activity>("activity", &id, raw)?;
            Some((id, activity))
        })
        .collect();

    let schedule: Vec<ScheduledItem> = persisted
        .schedule
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| parse_entry("scheduled item", &index.to_string(), raw))
        .collect();

    Ok(WeekendlyState {
        activities,
        schedule,
        ui: persisted.ui.unwrap_or_default().migrate(),
    })
}

fn parse_entry<T: DeserializeOwned>(kind: &str, key: &str, raw: Value) -> Option<T> {
    match serde_json::from_value(raw) {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::warn!("Skipping unreadable {} {}: {}", kind, key, e);
            None
        }
    }
}
