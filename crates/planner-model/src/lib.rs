pub mod checked;
pub mod error;
pub mod event;
pub mod field;
pub mod guest;
pub mod menu;
pub mod quest;

pub use checked::CheckedState;
pub use error::{ModelError, Result};
pub use event::{Event, FnbSlot, Weekday};
pub use field::GuestField;
pub use guest::{Count, GuestRecord, MealService};
pub use menu::{MenuData, MenuItem};
pub use quest::{Reminder, ReminderKind, ReminderStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_record_serializes_with_source_field_names() {
        let record = GuestRecord {
            room: "101".to_string(),
            guest_name: "SMITH, JOHN".to_string(),
            arrival_date: "2025-12-21".to_string(),
            meal_plan: "BB".to_string(),
            adults: Count::Known(2),
            ..GuestRecord::default()
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["guestName"], "SMITH, JOHN");
        assert_eq!(json["arrivalDate"], "2025-12-21");
        assert_eq!(json["adults"], 2);
        assert_eq!(json["children"], "");
    }

    #[test]
    fn count_round_trips_sentinel_and_number() {
        let known: Count = serde_json::from_str("2").expect("number count");
        assert_eq!(known, Count::Known(2));
        let sentinel: Count = serde_json::from_str("\"\"").expect("sentinel count");
        assert_eq!(sentinel, Count::Unknown);
        let text: Count = serde_json::from_str("\"two\"").expect("non-numeric count");
        assert_eq!(text, Count::Unknown);
    }

    #[test]
    fn event_round_trips_source_document_shape() {
        let json = r#"{
            "EventId": 3,
            "EventName": "Board Dinner",
            "Date": "2025-12-21",
            "DayOfWeek": "Sunday",
            "StartTime": "19:00",
            "EndTime": "22:00",
            "Room": "Lavery Suite",
            "SetupType": "Banquet",
            "SetupNumber": 40,
            "OrganizerName": "A. Byrne",
            "OrganizerArrival": null,
            "GuestCount": 38,
            "Notes": "",
            "ExtraTasks": ["Stage", "Lectern"],
            "FoodAndBeverage": [{"Time": "19:30", "Action": "Starters served"}]
        }"#;
        let event: Event = serde_json::from_str(json).expect("deserialize event");
        assert_eq!(event.id, Some(3));
        assert_eq!(event.food_and_beverage.len(), 1);
        let round = serde_json::to_value(&event).expect("serialize event");
        assert_eq!(round["EventName"], "Board Dinner");
        assert_eq!(round["FoodAndBeverage"][0]["Time"], "19:30");
    }

    #[test]
    fn header_synonyms_resolve() {
        assert_eq!(GuestField::resolve_header("Room No"), Some(GuestField::Room));
        assert_eq!(
            GuestField::resolve_header("Guest-Name"),
            Some(GuestField::GuestName)
        );
        assert_eq!(
            GuestField::resolve_header("ARRIVAL"),
            Some(GuestField::ArrivalDate)
        );
        assert_eq!(GuestField::resolve_header("Plan"), Some(GuestField::MealPlan));
        assert_eq!(GuestField::resolve_header("Booking Ref"), None);
    }
}
