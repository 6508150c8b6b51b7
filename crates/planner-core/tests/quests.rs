use planner_core::quests::{
    abandon, complete, count_label, group_by_zone, meta_label, sort_complete_last,
};
use planner_model::{Reminder, ReminderKind, ReminderStatus};

fn quest(id: &str, title: &str, zone: Option<&str>, kind: ReminderKind) -> Reminder {
    Reminder {
        id: id.to_string(),
        title: title.to_string(),
        zone: zone.map(str::to_string),
        kind,
        status: ReminderStatus::Active,
        tag: None,
        short: String::new(),
        long: String::new(),
    }
}

#[test]
fn groups_follow_first_seen_zone_order() {
    let quests = vec![
        quest("1", "Polish silverware", Some("Restaurant"), ReminderKind::Normal),
        quest("2", "Restock towels", Some("Pool"), ReminderKind::Daily),
        quest("3", "Check reservations", Some("Restaurant"), ReminderKind::Normal),
        quest("4", "Walk the lobby", None, ReminderKind::Normal),
    ];
    let groups = group_by_zone(&quests);
    let names: Vec<&str> = groups.iter().map(|(zone, _)| zone.as_str()).collect();
    assert_eq!(names, vec!["Restaurant", "Pool", "All"]);
    assert_eq!(groups[0].1.len(), 2);
}

#[test]
fn meta_labels() {
    let mut q = quest("1", "x", None, ReminderKind::Elite);
    assert_eq!(meta_label(&q), "(Elite)");
    q.kind = ReminderKind::Normal;
    assert_eq!(meta_label(&q), "");
    q.status = ReminderStatus::Complete;
    // Completion wins over kind.
    assert_eq!(meta_label(&q), "(Complete)");
}

#[test]
fn completed_quests_sink_to_the_bottom_stably() {
    let mut quests = vec![
        quest("1", "a", None, ReminderKind::Normal),
        quest("2", "b", None, ReminderKind::Normal),
        quest("3", "c", None, ReminderKind::Normal),
    ];
    quests[0].status = ReminderStatus::Complete;
    sort_complete_last(&mut quests);
    let ids: Vec<&str> = quests.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);
}

#[test]
fn complete_and_abandon_by_id() {
    let mut quests = vec![
        quest("1", "a", None, ReminderKind::Normal),
        quest("2", "b", None, ReminderKind::Normal),
    ];
    assert!(complete(&mut quests, "1"));
    assert!(quests[0].is_complete());
    assert!(!complete(&mut quests, "missing"));

    assert!(abandon(&mut quests, "2"));
    assert_eq!(quests.len(), 1);
    assert!(!abandon(&mut quests, "2"));
}

#[test]
fn count_label_clamps_at_the_cap() {
    assert_eq!(count_label(3), "Quests: 3/20");
    assert_eq!(count_label(64), "Quests: 20/20");
}
