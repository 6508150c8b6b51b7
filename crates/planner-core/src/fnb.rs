//! Food-and-beverage timeline for a single day.

use planner_model::Event;

/// One flattened service point: the slot plus its owning event context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItem {
    pub time: String,
    pub action: String,
    pub event_name: String,
    pub room: String,
}

/// Flatten every F&B slot for the given day and order by service time.
///
/// `HH:MM` strings order correctly under plain lexicographic comparison;
/// the sort is stable so same-time slots keep catalog order.
pub fn build_timeline(events: &[Event], day: &str) -> Vec<TimelineItem> {
    let mut items: Vec<TimelineItem> = events
        .iter()
        .filter(|event| event.day_of_week == day)
        .flat_map(|event| {
            event.food_and_beverage.iter().map(|slot| TimelineItem {
                time: slot.time.clone(),
                action: slot.action.clone(),
                event_name: event.name.clone(),
                room: event.room.clone(),
            })
        })
        .collect();
    items.sort_by(|a, b| a.time.cmp(&b.time));
    items
}

/// Distinct day-of-week values in catalog order; the first one is the
/// default timeline day.
pub fn event_days(events: &[Event]) -> Vec<String> {
    let mut days = Vec::new();
    for event in events {
        if !days.contains(&event.day_of_week) {
            days.push(event.day_of_week.clone());
        }
    }
    days
}
