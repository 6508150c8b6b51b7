//! Food-and-beverage timeline rendering.

use planner_core::TimelineItem;

pub fn timeline_text(items: &[TimelineItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{}  {} — {} ({})",
                item.time, item.action, item.event_name, item.room
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn timeline_summary(day: &str, count: usize) -> String {
    if count == 0 {
        format!("No Food & Beverage items for {day}.")
    } else {
        format!("Showing {count} Food & Beverage actions for {day}.")
    }
}
