use chrono::NaiveDate;
use planner_core::events::{
    self, EventDraft, EventFilter, append_event, filter_events, find_event, is_past,
    next_event_id,
};
use planner_model::Event;

fn event(id: i64, name: &str, room: &str, day: &str, organizer: &str) -> Event {
    Event {
        id: Some(id),
        name: name.to_string(),
        room: room.to_string(),
        day_of_week: day.to_string(),
        organizer_name: organizer.to_string(),
        ..Event::default()
    }
}

fn catalog() -> Vec<Event> {
    vec![
        event(1, "Boardroom Breakfast", "Lavery Suite", "Monday", "A. Byrne"),
        event(2, "Product Launch", "Atrium", "Tuesday", "K. Walsh"),
        event(3, "Charity Gala", "Lavery Suite", "Friday", "A. Byrne"),
    ]
}

#[test]
fn search_matches_name_or_organizer() {
    let events = catalog();
    let by_name = filter_events(
        &events,
        &EventFilter {
            search: "launch".to_string(),
            ..EventFilter::default()
        },
    );
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, Some(2));

    let by_organizer = filter_events(
        &events,
        &EventFilter {
            search: "byrne".to_string(),
            ..EventFilter::default()
        },
    );
    assert_eq!(by_organizer.len(), 2);
}

#[test]
fn room_and_day_filters_are_exact() {
    let events = catalog();
    let filtered = filter_events(
        &events,
        &EventFilter {
            room: Some("Lavery Suite".to_string()),
            day: Some("Friday".to_string()),
            ..EventFilter::default()
        },
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Charity Gala");
}

#[test]
fn unique_rooms_and_days_are_sorted_and_deduped() {
    let events = catalog();
    assert_eq!(events::unique_rooms(&events), vec!["Atrium", "Lavery Suite"]);
    assert_eq!(
        events::unique_days(&events),
        vec!["Friday", "Monday", "Tuesday"]
    );
}

#[test]
fn past_detection_needs_date_and_end_time() {
    let now = NaiveDate::from_ymd_opt(2025, 12, 22)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let mut ev = event(1, "Ended", "Atrium", "Sunday", "A. Byrne");
    ev.date = Some("2025-12-21".to_string());
    ev.end_time = Some("18:00".to_string());
    assert!(is_past(&ev, now));

    ev.end_time = Some("10:00".to_string());
    ev.date = Some("2025-12-22".to_string());
    assert!(!is_past(&ev, now));

    ev.end_time = None;
    assert!(!is_past(&ev, now));

    ev.end_time = Some("not a time".to_string());
    assert!(!is_past(&ev, now));
}

#[test]
fn next_id_follows_the_last_event() {
    assert_eq!(next_event_id(&[]), 1);
    assert_eq!(next_event_id(&catalog()), 4);
}

#[test]
fn draft_defaults_fill_missing_fields() {
    let built = EventDraft::default().build();
    assert_eq!(built.name, "New Event");
    assert_eq!(built.room, "Room TBC");
    assert_eq!(built.day_of_week, "TBC");
    assert_eq!(built.start_time.as_deref(), Some("TBC"));
    assert_eq!(built.organizer_name, "Organizer TBC");
    assert_eq!(built.date, None);
    assert_eq!(built.organizer_arrival, None);
}

#[test]
fn draft_parses_tasks_fnb_and_arrival() {
    let draft = EventDraft {
        name: "Team Offsite".to_string(),
        date: "2025-12-21".to_string(),
        organizer_arrival: "08:30".to_string(),
        guest_count: "24".to_string(),
        extra_tasks: "Stage, Lectern , ,Flipchart".to_string(),
        food_and_beverage: "09:00 Coffee break, 12:30 Lunch service, 15:00".to_string(),
        ..EventDraft::default()
    };
    let built = draft.build();
    assert_eq!(built.extra_tasks, vec!["Stage", "Lectern", "Flipchart"]);
    assert_eq!(built.food_and_beverage.len(), 2);
    assert_eq!(built.food_and_beverage[0].time, "09:00");
    assert_eq!(built.food_and_beverage[1].action, "Lunch service");
    assert_eq!(
        built.organizer_arrival.as_deref(),
        Some("2025-12-21T08:30:00")
    );
    assert_eq!(built.guest_count, Some(24));
}

#[test]
fn append_assigns_the_next_id() {
    let mut events = catalog();
    let draft = EventDraft {
        name: "Wrap Party".to_string(),
        ..EventDraft::default()
    };
    let id = append_event(&mut events, &draft);
    assert_eq!(id, 4);
    assert_eq!(events.len(), 4);
    assert_eq!(find_event(&events, 4).unwrap().name, "Wrap Party");
}
