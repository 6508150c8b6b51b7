//! Event list table and single-event detail card.

use chrono::{NaiveDate, NaiveDateTime};
use comfy_table::{Cell, Table};

use planner_model::Event;

use crate::style::{apply_table_style, header_cell};

/// `21 Dec 2025` style display for a catalog date.
pub fn format_event_date(date: Option<&str>) -> String {
    date.and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .map(|parsed| parsed.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "Date TBC".to_string())
}

/// `HH:MM` display for an organizer-arrival date-time.
pub fn format_arrival(arrival: Option<&str>) -> String {
    arrival
        .and_then(|raw| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
        .map(|parsed| parsed.format("%H:%M").to_string())
        .unwrap_or_else(|| "TBC".to_string())
}

fn time_or_tbc(value: Option<&str>) -> &str {
    match value {
        Some(time) if !time.is_empty() => time,
        _ => "TBC",
    }
}

/// Render a filtered event list; past events get a marker column.
pub fn events_table(view: &[&Event], past: &[bool]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Event"),
        header_cell("Day"),
        header_cell("Date"),
        header_cell("Time"),
        header_cell("Room"),
        header_cell("Setup"),
        header_cell("Guests"),
        header_cell("Organizer"),
        header_cell("Past"),
    ]);
    apply_table_style(&mut table);

    for (idx, event) in view.iter().enumerate() {
        table.add_row(vec![
            Cell::new(
                event
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(&event.name),
            Cell::new(if event.day_of_week.is_empty() {
                "TBC"
            } else {
                event.day_of_week.as_str()
            }),
            Cell::new(format_event_date(event.date.as_deref())),
            Cell::new(format!(
                "{} – {}",
                time_or_tbc(event.start_time.as_deref()),
                time_or_tbc(event.end_time.as_deref())
            )),
            Cell::new(&event.room),
            Cell::new(&event.setup_type),
            Cell::new(
                event
                    .guest_count
                    .map(|count| count.to_string())
                    .unwrap_or_else(|| "TBC".to_string()),
            ),
            Cell::new(&event.organizer_name),
            Cell::new(if past.get(idx).copied().unwrap_or(false) {
                "✗"
            } else {
                ""
            }),
        ]);
    }
    table
}

/// Full detail card for one event, skipping empty sections.
pub fn event_card(event: &Event) -> String {
    let mut lines = vec![
        event.name.clone(),
        format!(
            "{} • {}",
            if event.day_of_week.is_empty() {
                "TBC"
            } else {
                event.day_of_week.as_str()
            },
            format_event_date(event.date.as_deref())
        ),
        format!(
            "Room: {} · Setup: {} ({})",
            event.room,
            event.setup_type,
            event
                .setup_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string())
        ),
        format!(
            "Time: {} – {}",
            time_or_tbc(event.start_time.as_deref()),
            time_or_tbc(event.end_time.as_deref())
        ),
        format!(
            "Guests: {}",
            event
                .guest_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "TBC".to_string())
        ),
        format!("Organizer: {}", event.organizer_name),
        format!(
            "Arrival: {}",
            format_arrival(event.organizer_arrival.as_deref())
        ),
    ];

    if !event.notes.is_empty() {
        lines.push(format!("Notes: {}", event.notes));
    }
    if !event.extra_tasks.is_empty() {
        lines.push(format!("Extra tasks: {}", event.extra_tasks.join(", ")));
    }
    if !event.food_and_beverage.is_empty() {
        lines.push("Food & Beverage:".to_string());
        for slot in &event.food_and_beverage {
            lines.push(format!("  {}  {}", slot.time, slot.action));
        }
    }
    lines.join("\n")
}

/// Summary line under the list, matching the grid page wording.
pub fn events_summary(visible: usize, total: usize) -> String {
    if total == 0 {
        "No events loaded.".to_string()
    } else if visible == total {
        format!("Showing {visible} of {total} events.")
    } else {
        format!("Showing {visible} of {total} events (filtered).")
    }
}
