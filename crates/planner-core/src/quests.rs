//! Quest-log operations: grouping, ordering, completion.

use planner_model::{Reminder, ReminderKind};

/// Cap shown in the quest-count pill.
pub const QUEST_CAP: usize = 20;

/// Group reminders by zone in first-seen order; reminders without a zone
/// land in the "All" group.
pub fn group_by_zone<'a>(reminders: &'a [Reminder]) -> Vec<(String, Vec<&'a Reminder>)> {
    let mut groups: Vec<(String, Vec<&'a Reminder>)> = Vec::new();
    for reminder in reminders {
        let zone = reminder.zone.clone().unwrap_or_else(|| "All".to_string());
        match groups.iter_mut().find(|(name, _)| *name == zone) {
            Some((_, members)) => members.push(reminder),
            None => groups.push((zone, vec![reminder])),
        }
    }
    groups
}

/// Parenthesized meta label for a list row; plain quests get none.
pub fn meta_label(reminder: &Reminder) -> &'static str {
    if reminder.is_complete() {
        return "(Complete)";
    }
    match reminder.kind {
        ReminderKind::Elite => "(Elite)",
        ReminderKind::Daily => "(Daily)",
        ReminderKind::Important => "(Important)",
        ReminderKind::Normal => "",
    }
}

/// Stable partition: active quests first, completed ones last.
pub fn sort_complete_last(reminders: &mut [Reminder]) {
    reminders.sort_by_key(Reminder::is_complete);
}

/// Mark a quest complete. Returns false when the id is unknown.
pub fn complete(reminders: &mut [Reminder], id: &str) -> bool {
    match reminders.iter_mut().find(|r| r.id == id) {
        Some(reminder) => {
            reminder.status = planner_model::ReminderStatus::Complete;
            true
        }
        None => false,
    }
}

/// Drop a quest from the log. Returns false when the id is unknown.
pub fn abandon(reminders: &mut Vec<Reminder>, id: &str) -> bool {
    let before = reminders.len();
    reminders.retain(|r| r.id != id);
    reminders.len() != before
}

/// Clipboard share text for one quest.
pub fn share_text(reminder: &Reminder) -> String {
    format!(
        "📌 {}\n✅ {}\n\n📝 {}",
        reminder.title, reminder.short, reminder.long
    )
}

/// Count-pill text, clamped at the quest cap.
pub fn count_label(total: usize) -> String {
    format!("Quests: {}/{}", total.min(QUEST_CAP), QUEST_CAP)
}
