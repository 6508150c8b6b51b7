//! Guest-directory table and summary pills.

use comfy_table::{Cell, CellAlignment, Table};

use planner_core::DirectoryCounts;
use planner_core::guests::guest_key;
use planner_model::{CheckedState, GuestRecord, MealService};

use crate::style::{apply_table_style, header_cell};

/// Render the filtered, sorted directory view as a table.
pub fn directory_table(view: &[&GuestRecord], checked: &CheckedState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Room"),
        header_cell("Guest"),
        header_cell("Plan"),
        header_cell("Company"),
        header_cell("Arrival"),
        header_cell("Departure"),
        header_cell("Adults"),
        header_cell("Notes"),
        header_cell("Checked"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(6) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(column) = table.column_mut(8) {
        column.set_cell_alignment(CellAlignment::Center);
    }

    for guest in view {
        let plan = guest.meal_plan.to_uppercase();
        table.add_row(vec![
            Cell::new(placeholder(&guest.room)),
            Cell::new(if guest.guest_name.is_empty() {
                "Unknown"
            } else {
                guest.guest_name.as_str()
            }),
            Cell::new(format!("{} ({})", plan, MealService::classify(&plan).label())),
            Cell::new(placeholder(&guest.company)),
            Cell::new(&guest.arrival_date),
            Cell::new(&guest.departure_date),
            Cell::new(guest.adults.to_string()),
            Cell::new(&guest.notes),
            Cell::new(if checked.is_checked(&guest_key(guest)) {
                "✓"
            } else {
                ""
            }),
        ]);
    }
    table
}

fn placeholder(value: &str) -> &str {
    if value.is_empty() { "—" } else { value }
}

/// The four summary pills as one line.
pub fn pills_line(counts: &DirectoryCounts) -> String {
    format!(
        "{} guests · BB: {} · RO: {} · Checked: {}",
        counts.total, counts.breakfast, counts.room_only, counts.checked
    )
}

/// Detail block for one guest, skipping empty fields.
pub fn guest_detail(guest: &GuestRecord, checked: &CheckedState) -> String {
    let plan = guest.meal_plan.to_uppercase();
    let subtitle = match MealService::classify(&plan) {
        MealService::Breakfast => "BB: free breakfast (no payment).",
        MealService::RoomOnly => "RO: breakfast not included (needs payment/menu).",
        MealService::Other => "Plan unknown.",
    };

    let mut lines = vec![
        format!(
            "Room {} · {}",
            placeholder(&guest.room),
            if guest.guest_name.is_empty() {
                "Unknown"
            } else {
                guest.guest_name.as_str()
            }
        ),
        subtitle.to_string(),
        String::new(),
    ];
    let rows = [
        ("Room", guest.room.clone()),
        ("Guest", guest.guest_name.clone()),
        ("Arrival", guest.arrival_date.clone()),
        ("Departure", guest.departure_date.clone()),
        ("Rate code", guest.rate_code.clone()),
        ("Meal plan", plan),
        ("Company", guest.company.clone()),
        ("Adults", guest.adults.to_string()),
        ("Children", guest.children.to_string()),
        ("Infants", guest.infants.to_string()),
        ("Notes", guest.notes.clone()),
    ];
    for (label, value) in rows {
        if !value.trim().is_empty() {
            lines.push(format!("{label:>10}: {value}"));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Breakfast checked: {}",
        if checked.is_checked(&guest_key(guest)) {
            "yes"
        } else {
            "no"
        }
    ));
    lines.join("\n")
}
