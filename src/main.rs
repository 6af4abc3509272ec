// Weekendly
// Main entry point: opens the saved plan and prints a summary of it

use anyhow::{Context, Result};
use chrono::Local;

use weekendly::services::config::WeekendlyConfig;
use weekendly::services::holiday::HolidayCalendar;
use weekendly::services::persistence::{shared, SqliteBlobStore};
use weekendly::services::schedule_view::schedule_title;
use weekendly::services::session::WeekendSession;
use weekendly::services::weekend::visible_days;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Weekendly");

    // An unusable config file is reported by load() itself.
    let config = WeekendlyConfig::load().config;

    let db_path = config.resolved_database_path();
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory: {:?}", parent))?;
    }
    let storage = SqliteBlobStore::open(&db_path.to_string_lossy())?;
    log::info!("Using plan database at {:?}", db_path);

    let mut session = WeekendSession::open(shared(storage), config.debounce())?;
    let state = session.state();

    let days: Vec<String> = visible_days(&state.ui).iter().map(|d| d.label()).collect();
    log::info!(
        "{} ({}): {}",
        schedule_title(&state.ui),
        state.ui.weekend_type.label(),
        days.join(", ")
    );
    log::info!(
        "{} activities, {} scheduled items",
        state.activities.len(),
        state.schedule.len()
    );

    for column in session.day_columns() {
        log::info!("{}: {} item(s)", column.label, column.cards.len());
        for card in &column.cards {
            log::info!(
                "  {} {} {} ({})",
                card.start_label(),
                card.icon(),
                card.activity.title,
                card.duration_label()
            );
        }
    }

    let today = Local::now().date_naive();
    match session.next_holiday_suggestion(&HolidayCalendar::default(), today) {
        Some(suggestion) => log::info!(
            "Upcoming long weekend: {} ({}), {}",
            suggestion.holiday.name,
            suggestion.date_range,
            suggestion.weekend_type.label()
        ),
        None => log::info!("No upcoming long weekends"),
    }
    log::info!("Posters are exported to {:?}", config.resolved_export_dir());

    session.flush().await;
    log::info!("Weekendly finished");
    Ok(())
}
