//! Weekly room-by-day schedule grid.

use planner_model::{Event, Weekday};

/// One event placed in a grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub name: String,
    pub setup_type: String,
    pub guest_count: Option<i64>,
    pub start: String,
    pub end: String,
}

impl ScheduleEntry {
    fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            setup_type: event.setup_type.clone(),
            guest_count: event.guest_count,
            start: event.start_time.clone().unwrap_or_else(|| "TBC".to_string()),
            end: event.end_time.clone().unwrap_or_else(|| "TBC".to_string()),
        }
    }
}

/// Rooms (rows) against the seven weekdays (columns), each cell holding the
/// events for that room on that day.
#[derive(Debug, Clone)]
pub struct ScheduleGrid {
    pub rooms: Vec<String>,
    /// `cells[room_index][day_index]`, day indices following [`Weekday::ALL`].
    pub cells: Vec<Vec<Vec<ScheduleEntry>>>,
    pub total_events: usize,
}

impl ScheduleGrid {
    pub fn build(events: &[Event]) -> ScheduleGrid {
        let mut rooms: Vec<String> = events.iter().map(|e| e.room.clone()).collect();
        rooms.sort();
        rooms.dedup();

        let cells = rooms
            .iter()
            .map(|room| {
                Weekday::ALL
                    .iter()
                    .map(|day| {
                        events
                            .iter()
                            .filter(|event| {
                                event.room == *room && event.day_of_week == day.as_str()
                            })
                            .map(ScheduleEntry::from_event)
                            .collect()
                    })
                    .collect()
            })
            .collect();

        ScheduleGrid {
            rooms,
            cells,
            total_events: events.len(),
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
