//! Repository round trips against a temporary store directory.

use planner_model::{CheckedState, Count, GuestRecord, Reminder, ReminderStatus};
use planner_store::{CheckedRepository, GuestRepository, QuestRepository};
use tempfile::TempDir;

fn sample_guest(room: &str, name: &str) -> GuestRecord {
    GuestRecord {
        room: room.to_string(),
        guest_name: name.to_string(),
        arrival_date: "2025-12-21".to_string(),
        meal_plan: "BB".to_string(),
        adults: Count::Known(2),
        ..GuestRecord::default()
    }
}

#[test]
fn guest_list_round_trips() {
    let dir = TempDir::new().expect("temp dir");
    let repo = GuestRepository::new(dir.path()).expect("create repo");

    assert!(repo.load().expect("empty load").is_empty());

    let guests = vec![sample_guest("101", "SMITH, JOHN"), sample_guest("102", "GARCIA, MARIA")];
    let path = repo.save(&guests).expect("save guests");
    assert!(path.ends_with("guests_v1.json"));

    let loaded = repo.load().expect("load guests");
    assert_eq!(loaded, guests);
}

#[test]
fn save_replaces_the_stored_list_wholesale() {
    let dir = TempDir::new().expect("temp dir");
    let repo = GuestRepository::new(dir.path()).expect("create repo");

    repo.save(&[sample_guest("101", "SMITH")]).expect("first save");
    repo.save(&[sample_guest("202", "NOVAK")]).expect("second save");

    let loaded = repo.load().expect("load guests");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].room, "202");
}

#[test]
fn corrupt_guest_document_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let repo = GuestRepository::new(dir.path()).expect("create repo");
    std::fs::write(repo.path(), "not json").expect("write corrupt file");

    let err = repo.load().expect_err("corrupt load");
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn checked_state_round_trips_and_unchecking_removes_keys() {
    let dir = TempDir::new().expect("temp dir");
    let repo = CheckedRepository::new(dir.path()).expect("create repo");

    let mut state = CheckedState::default();
    state.set_checked("101|smith, john|2025-12-21", true);
    state.set_checked("102|garcia, maria|2025-12-20", true);
    state.set_checked("102|garcia, maria|2025-12-20", false);
    repo.save(&state).expect("save checked");

    let loaded = repo.load().expect("load checked");
    assert!(loaded.is_checked("101|smith, john|2025-12-21"));
    assert!(!loaded.is_checked("102|garcia, maria|2025-12-20"));
    assert_eq!(loaded.checked_count(), 1);
}

#[test]
fn quest_log_round_trips() {
    let dir = TempDir::new().expect("temp dir");
    let repo = QuestRepository::new(dir.path()).expect("create repo");

    let quests = vec![Reminder {
        id: "q1".to_string(),
        title: "Restock lobby coffee".to_string(),
        zone: Some("Lobby".to_string()),
        kind: planner_model::ReminderKind::Daily,
        status: ReminderStatus::Active,
        tag: None,
        short: "Before 07:00".to_string(),
        long: String::new(),
    }];
    repo.save(&quests).expect("save quests");

    let loaded = repo.load().expect("load quests");
    assert_eq!(loaded, quests);
}
