//! Weekly schedule grid rendering.

use comfy_table::{Cell, Table};

use planner_core::ScheduleGrid;
use planner_model::Weekday;

use crate::style::{apply_table_style, header_cell};

/// Room-by-day table; each cell stacks that day's events.
pub fn schedule_table(grid: &ScheduleGrid) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Room")];
    header.extend(Weekday::ALL.iter().map(|day| header_cell(day.as_str())));
    table.set_header(header);
    apply_table_style(&mut table);

    for (room_idx, room) in grid.rooms.iter().enumerate() {
        let mut row = vec![Cell::new(room)];
        for day_idx in 0..Weekday::ALL.len() {
            let entries = &grid.cells[room_idx][day_idx];
            let text = entries
                .iter()
                .map(|entry| {
                    format!(
                        "{}\n{} ({} pax)\n{} – {}",
                        entry.name,
                        entry.setup_type,
                        entry
                            .guest_count
                            .map(|count| count.to_string())
                            .unwrap_or_else(|| "?".to_string()),
                        entry.start,
                        entry.end
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n");
            row.push(Cell::new(text));
        }
        table.add_row(row);
    }
    table
}

pub fn schedule_summary(grid: &ScheduleGrid) -> String {
    format!(
        "Showing {} events across {} rooms this week.",
        grid.total_events,
        grid.room_count()
    )
}
