//! Root aggregate for a weekend plan.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::activity::Activity;
use crate::models::schedule::ScheduledItem;
use crate::models::settings::UiPreferences;

/// Everything the planner knows: the activity catalogue, the placements on
/// the timeline (insertion order) and the UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendlyState {
    pub activities: BTreeMap<String, Activity>,
    pub schedule: Vec<ScheduledItem>,
    pub ui: UiPreferences,
}

impl WeekendlyState {
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.get(id)
    }

    pub fn scheduled_item(&self, id: &str) -> Option<&ScheduledItem> {
        self.schedule.iter().find(|item| item.id == id)
    }

    /// Scheduled items whose activity no longer exists.
    pub fn dangling_items(&self) -> impl Iterator<Item = &ScheduledItem> {
        self.schedule
            .iter()
            .filter(|item| !self.activities.contains_key(&item.activity_id))
    }
}
