//! Read-only view model for the schedule: ordered day columns with laid out
//! cards. Items whose activity has been deleted are skipped.

use crate::models::activity::Activity;
use crate::models::day::Day;
use crate::models::schedule::ScheduledItem;
use crate::models::settings::{UiPreferences, WeekendType};
use crate::models::state::WeekendlyState;
use crate::services::timeline::{card_layout, hour_label, minutes_to_offset, CardLayout};
use crate::services::weekend::visible_days;
use crate::utils::date::format_hour_minute;

/// One scheduled card, resolved against its activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledCard<'a> {
    pub item: &'a ScheduledItem,
    pub activity: &'a Activity,
    pub layout: CardLayout,
}

impl ScheduledCard<'_> {
    pub fn start_label(&self) -> String {
        format_hour_minute(&self.item.start_iso)
    }

    pub fn duration_label(&self) -> String {
        format!("{} min", self.item.duration_minutes)
    }

    pub fn icon(&self) -> &'static str {
        self.activity.display_category().icon()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn<'a> {
    pub day: Day,
    pub label: String,
    pub cards: Vec<ScheduledCard<'a>>,
}

/// Heading shown above the columns.
pub fn schedule_title(ui: &UiPreferences) -> &'static str {
    match ui.weekend_type {
        WeekendType::Custom => "Custom Schedule",
        _ => "Weekend Schedule",
    }
}

/// Columns for the visible weekend days, each with its cards in insertion order.
pub fn build_day_columns(state: &WeekendlyState) -> Vec<DayColumn<'_>> {
    visible_days(&state.ui)
        .into_iter()
        .map(|day| {
            let cards = state
                .schedule
                .iter()
                .filter(|item| item.day == day)
                .filter_map(|item| {
                    let activity = state.activities.get(&item.activity_id)?;
                    Some(ScheduledCard {
                        item,
                        activity,
                        layout: card_layout(&item.start_iso, item.duration_minutes),
                    })
                })
                .collect();

            DayColumn {
                label: day.label(),
                day,
                cards,
            }
        })
        .collect()
}

/// Gutter markers for each hour: (hour, offset, label).
pub fn hour_markers() -> Vec<(u32, f32, String)> {
    (0..24)
        .map(|hour| (hour, minutes_to_offset(hour, 0), hour_label(hour)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::timeline::MIN_CARD_HEIGHT;
    use crate::utils::date::today_at;

    fn sample_state() -> WeekendlyState {
        let mut state = WeekendlyState::default();
        state.activities.insert("a1".into(), Activity::new("a1", "Run"));
        state.schedule = vec![
            ScheduledItem::new("s1", "a1", Day::sunday(), today_at(8, 0), 30),
            ScheduledItem::new("s2", "deleted", Day::saturday(), today_at(9, 0), 60),
            ScheduledItem::new("s3", "a1", Day::saturday(), today_at(10, 0), 120),
            ScheduledItem::new("s4", "a1", Day::monday(), today_at(10, 0), 60),
        ];
        state
    }

    #[test]
    fn test_columns_follow_weekend_type() {
        let state = sample_state();
        let columns = build_day_columns(&state);
        let labels: Vec<_> = columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Saturday", "Sunday"]);
    }

    #[test]
    fn test_dangling_items_are_skipped() {
        let state = sample_state();
        let columns = build_day_columns(&state);

        let saturday: Vec<_> = columns[0].cards.iter().map(|c| c.item.id.as_str()).collect();
        assert_eq!(saturday, vec!["s3"]);
        assert_eq!(columns[1].cards.len(), 1);
    }

    #[test]
    fn test_cards_are_laid_out() {
        let state = sample_state();
        let columns = build_day_columns(&state);

        let sunday_card = &columns[1].cards[0];
        assert_eq!(sunday_card.layout.top, 480.0);
        assert_eq!(sunday_card.layout.height, MIN_CARD_HEIGHT);
        assert_eq!(sunday_card.start_label(), "08:00");
        assert_eq!(sunday_card.duration_label(), "30 min");
        assert_eq!(sunday_card.icon(), "⭐");

        let saturday_card = &columns[0].cards[0];
        assert_eq!(saturday_card.layout.height, 120.0);
    }

    #[test]
    fn test_custom_days_are_ordered() {
        let mut state = sample_state();
        state.ui.weekend_type = WeekendType::Custom;
        state.ui.custom_days = vec![Day::new("holiday"), Day::monday(), Day::friday()];

        let columns = build_day_columns(&state);
        let days: Vec<_> = columns.iter().map(|c| c.day.id()).collect();
        assert_eq!(days, vec!["friday", "monday", "holiday"]);
        assert_eq!(columns[1].cards.len(), 1);
        assert_eq!(schedule_title(&state.ui), "Custom Schedule");
    }

    #[test]
    fn test_hour_markers_cover_the_day() {
        let markers = hour_markers();
        assert_eq!(markers.len(), 24);
        assert_eq!(markers[0], (0, 0.0, "12:00 AM".to_string()));
        assert_eq!(markers[13], (13, 780.0, "1:00 PM".to_string()));
        assert_eq!(schedule_title(&UiPreferences::default()), "Weekend Schedule");
    }
}
