//! A weekend plan being edited.
//!
//! [`WeekendSession`] is the handle callers thread through instead of a global
//! store: it owns the [`Store`] and, when opened against durable storage, the
//! debounced [`PersistenceBridge`] that follows every change.

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use std::time::Duration;

use crate::models::holiday::LongWeekendSuggestion;
use crate::models::state::WeekendlyState;
use crate::services::holiday::{apply_actions, dismiss_action, HolidayCalendar};
use crate::services::persistence::{hydrate, PersistenceBridge, SharedBlobStore};
use crate::services::placement::{resolve_drop, DropEvent};
use crate::services::schedule_view::{build_day_columns, DayColumn};
use crate::services::store::{Action, Store};

pub struct WeekendSession {
    store: Store,
    persistence: Option<PersistenceBridge>,
}

impl Default for WeekendSession {
    fn default() -> Self {
        Self::in_memory(WeekendlyState::default())
    }
}

impl WeekendSession {
    /// A session that is never written anywhere.
    pub fn in_memory(state: WeekendlyState) -> Self {
        Self {
            store: Store::new(state),
            persistence: None,
        }
    }

    /// Hydrate from `storage` once, then persist every later change after
    /// `debounce`. Must be called inside a tokio runtime.
    pub fn open(storage: SharedBlobStore, debounce: Duration) -> Result<Self> {
        let mut store = Store::default();
        {
            let guard = storage
                .lock()
                .map_err(|e| anyhow!("Failed to acquire storage lock: {}", e))?;
            hydrate(&mut store, &*guard);
        }

        // Attached after hydration so loading does not trigger a write-back.
        let bridge = PersistenceBridge::new(storage, debounce)?;
        Ok(Self {
            store,
            persistence: Some(bridge),
        })
    }

    pub fn state(&self) -> &WeekendlyState {
        self.store.state()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn is_persistent(&self) -> bool {
        self.persistence.is_some()
    }

    /// Apply `action`; a changed plan is queued for writing.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = self.store.dispatch(action);
        if changed {
            if let Some(bridge) = self.persistence.as_mut() {
                bridge.schedule_write(self.store.state());
            }
        }
        changed
    }

    /// Dispatch each action in order; returns whether any changed the plan.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> bool {
        actions
            .into_iter()
            .fold(false, |changed, action| self.dispatch(action) || changed)
    }

    /// Handle a finished drag using today's local date.
    pub fn drop_item(&mut self, event: &DropEvent) -> bool {
        self.drop_item_on(event, Local::now().date_naive())
    }

    pub fn drop_item_on(&mut self, event: &DropEvent, today: NaiveDate) -> bool {
        match resolve_drop(event, today) {
            Some(Action::ScheduleItem(item)) if self.state().activity(&item.activity_id).is_none() => {
                log::debug!("Drop ignored: activity {} is not in the catalogue", item.activity_id);
                false
            }
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    pub fn day_columns(&self) -> Vec<DayColumn<'_>> {
        build_day_columns(self.state())
    }

    /// Soonest long weekend the user has not dismissed yet.
    pub fn next_holiday_suggestion(
        &self,
        calendar: &HolidayCalendar,
        today: NaiveDate,
    ) -> Option<LongWeekendSuggestion> {
        calendar.next_suggestion(today, &self.state().ui.dismissed_holiday_suggestions)
    }

    /// Switch to the suggested weekend type and stop suggesting it.
    pub fn accept_suggestion(&mut self, suggestion: &LongWeekendSuggestion) -> bool {
        log::info!("Applying long weekend suggestion {}", suggestion.id);
        self.dispatch_all(apply_actions(suggestion))
    }

    pub fn dismiss_suggestion(&mut self, suggestion: &LongWeekendSuggestion) -> bool {
        self.dispatch(dismiss_action(suggestion))
    }

    /// Wait for the pending write, if any.
    pub async fn flush(&mut self) {
        if let Some(bridge) = self.persistence.as_mut() {
            bridge.flush().await;
        }
    }
}
