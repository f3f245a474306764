//! Display-window selection over a generated forecast.
//!
//! Both operations are pure, read-only projections; they can be recomputed on
//! every render without caching.

use chrono::Timelike;

use crate::model::{Forecast, ForecastDay, HourSlot};

/// Number of entries in the rolling hourly strip.
pub const HOURLY_WINDOW: usize = 12;

/// A forecast day paired with its display label.
#[derive(Debug, Clone)]
pub struct DailyEntry<'a> {
    pub label: String,
    pub day: &'a ForecastDay,
}

/// Select the next [`HOURLY_WINDOW`] hours to display.
///
/// Takes today's slots at or after `current_hour` in ascending order, then
/// wraps into the next day's early hours until the window is full or the
/// source runs out. The wrap stays chronological: current hour, 23:00, then
/// 00:00 of the following day.
pub fn hourly_window(forecast: &Forecast, current_hour: u32) -> Vec<&HourSlot> {
    let mut selected: Vec<&HourSlot> = Vec::with_capacity(HOURLY_WINDOW);

    if let Some(today) = forecast.days.first() {
        selected.extend(today.hours.iter().filter(|slot| slot.time.hour() >= current_hour));
    }

    if selected.len() < HOURLY_WINDOW {
        if let Some(next) = forecast.days.get(1) {
            let missing = HOURLY_WINDOW - selected.len();
            selected.extend(next.hours.iter().take(missing));
        }
    }

    selected.truncate(HOURLY_WINDOW);
    selected
}

/// Upcoming days for display: today is skipped, the first entry is labeled
/// "Tomorrow" and the rest carry their weekday name.
pub fn daily_window(forecast: &Forecast) -> Vec<DailyEntry<'_>> {
    forecast
        .days
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, day)| {
            let label = if index == 1 {
                "Tomorrow".to_string()
            } else {
                day.date.format("%A").to_string()
            };
            DailyEntry { label, day }
        })
        .collect()
}
