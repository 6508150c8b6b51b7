//! Event catalog: filtering, lookups, past detection, draft building.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use planner_model::{Event, FnbSlot};

/// Search/room/day filter, mirroring the grid page controls.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Case-insensitive substring match on event name or organizer name.
    pub search: String,
    pub room: Option<String>,
    pub day: Option<String>,
}

pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    let search = filter.search.trim().to_lowercase();
    events
        .iter()
        .filter(|event| {
            let matches_search = search.is_empty()
                || event.name.to_lowercase().contains(&search)
                || event.organizer_name.to_lowercase().contains(&search);
            let matches_room = filter
                .room
                .as_ref()
                .is_none_or(|room| event.room == *room);
            let matches_day = filter
                .day
                .as_ref()
                .is_none_or(|day| event.day_of_week == *day);
            matches_search && matches_room && matches_day
        })
        .collect()
}

/// Distinct rooms, sorted, for filter option lists.
pub fn unique_rooms(events: &[Event]) -> Vec<String> {
    let mut rooms: Vec<String> = events.iter().map(|e| e.room.clone()).collect();
    rooms.sort();
    rooms.dedup();
    rooms
}

/// Distinct day-of-week values, sorted, for filter option lists.
pub fn unique_days(events: &[Event]) -> Vec<String> {
    let mut days: Vec<String> = events.iter().map(|e| e.day_of_week.clone()).collect();
    days.sort();
    days.dedup();
    days
}

pub fn find_event<'a>(events: &'a [Event], id: i64) -> Option<&'a Event> {
    events.iter().find(|event| event.id == Some(id))
}

pub fn parse_event_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Whether an event has already ended relative to `now`.
///
/// Needs both a date and an end time; missing or unparseable values mean
/// the event is never considered past.
pub fn is_past(event: &Event, now: NaiveDateTime) -> bool {
    let Some(date) = event.date.as_deref().and_then(parse_event_date) else {
        return false;
    };
    let Some(end) = event
        .end_time
        .as_deref()
        .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M").ok())
    else {
        return false;
    };
    date.and_time(end) < now
}

/// Next id to assign: one past the id of the last event in the catalog.
pub fn next_event_id(events: &[Event]) -> i64 {
    match events.last() {
        Some(event) => event.id.unwrap_or(0) + 1,
        None => 1,
    }
}

/// Raw field values for a new event, as they come off the entry form.
///
/// `build` applies the same placeholder defaults the preview card shows, so
/// a draft is always renderable no matter how little has been filled in.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub setup_type: String,
    pub setup_number: String,
    pub organizer_name: String,
    pub organizer_arrival: String,
    pub guest_count: String,
    pub notes: String,
    /// Comma-separated task list.
    pub extra_tasks: String,
    /// Comma-separated `HH:MM action` service points.
    pub food_and_beverage: String,
}

impl EventDraft {
    pub fn build(&self) -> Event {
        let name = self.name.trim();
        let date = self.date.trim();
        let day = self.day_of_week.trim();
        let room = self.room.trim();
        let setup = self.setup_type.trim();
        let organizer = self.organizer_name.trim();

        Event {
            id: None,
            name: if name.is_empty() { "New Event" } else { name }.to_string(),
            date: if date.is_empty() {
                None
            } else {
                Some(date.to_string())
            },
            day_of_week: if day.is_empty() { "TBC" } else { day }.to_string(),
            start_time: Some(non_empty_or(&self.start_time, "TBC")),
            end_time: Some(non_empty_or(&self.end_time, "TBC")),
            room: if room.is_empty() { "Room TBC" } else { room }.to_string(),
            setup_type: if setup.is_empty() { "Setup Type" } else { setup }.to_string(),
            setup_number: parse_int(&self.setup_number),
            organizer_name: if organizer.is_empty() {
                "Organizer TBC"
            } else {
                organizer
            }
            .to_string(),
            organizer_arrival: build_arrival(date, self.organizer_arrival.trim()),
            guest_count: parse_int(&self.guest_count),
            notes: self.notes.trim().to_string(),
            extra_tasks: split_task_list(&self.extra_tasks),
            food_and_beverage: split_fnb_list(&self.food_and_beverage),
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }.to_string()
}

fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Arrival is only recorded when both the event date and an arrival time are
/// present and form a valid date-time.
fn build_arrival(date: &str, time: &str) -> Option<String> {
    if date.is_empty() || time.is_empty() {
        return None;
    }
    let candidate = format!("{date}T{time}");
    let parsed = NaiveDateTime::parse_from_str(&candidate, "%Y-%m-%dT%H:%M").ok()?;
    Some(parsed.format("%Y-%m-%dT%H:%M:00").to_string())
}

fn split_task_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|task| !task.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `HH:MM action` items; entries missing either part are dropped.
fn split_fnb_list(raw: &str) -> Vec<FnbSlot> {
    raw.split(',')
        .filter_map(|item| {
            let mut parts = item.trim().split_whitespace();
            let time = parts.next().unwrap_or_default().to_string();
            let action = parts.collect::<Vec<_>>().join(" ");
            if time.is_empty() || action.is_empty() {
                None
            } else {
                Some(FnbSlot { time, action })
            }
        })
        .collect()
}

/// Assign the next id and append the built draft to the catalog.
pub fn append_event(events: &mut Vec<Event>, draft: &EventDraft) -> i64 {
    let id = next_event_id(events);
    let mut event = draft.build();
    event.id = Some(id);
    debug!(id, name = %event.name, "event appended to catalog");
    events.push(event);
    id
}
