//! Quest-log rendering.

use planner_core::quests::{count_label, group_by_zone, meta_label};
use planner_model::Reminder;

/// Grouped quest listing with the count pill on top.
pub fn quest_list(reminders: &[Reminder]) -> String {
    let mut lines = vec![count_label(reminders.len()), String::new()];
    for (zone, members) in group_by_zone(reminders) {
        lines.push(zone);
        for reminder in members {
            let meta = meta_label(reminder);
            let marker = if reminder.is_complete() { "x" } else { "·" };
            if meta.is_empty() {
                lines.push(format!("  {} {} [{}]", marker, reminder.title, reminder.id));
            } else {
                lines.push(format!(
                    "  {} {} {} [{}]",
                    marker, reminder.title, meta, reminder.id
                ));
            }
        }
        lines.push(String::new());
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Detail block for one quest.
pub fn quest_detail(reminder: &Reminder) -> String {
    let mut lines = vec![reminder.title.clone()];
    if let Some(tag) = &reminder.tag {
        lines.push(format!("[{tag}]"));
    }
    lines.push(format!(
        "Objective: {}",
        if reminder.short.is_empty() {
            "—"
        } else {
            reminder.short.as_str()
        }
    ));
    lines.push(if reminder.long.is_empty() {
        "—".to_string()
    } else {
        reminder.long.clone()
    });
    lines.join("\n")
}
