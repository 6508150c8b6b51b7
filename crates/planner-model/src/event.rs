//! Event catalog value types.
//!
//! Field names mirror the `events.json` documents produced by the planning
//! desk, hence the PascalCase serde renames.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One scheduled function/event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "EventId")]
    pub id: Option<i64>,
    #[serde(rename = "EventName")]
    pub name: String,
    /// `YYYY-MM-DD`, or `None` when the date is still to be confirmed.
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "DayOfWeek", default)]
    pub day_of_week: String,
    #[serde(rename = "StartTime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "EndTime", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Room", default)]
    pub room: String,
    #[serde(rename = "SetupType", default)]
    pub setup_type: String,
    #[serde(rename = "SetupNumber")]
    pub setup_number: Option<i64>,
    #[serde(rename = "OrganizerName", default)]
    pub organizer_name: String,
    /// ISO date-time of the organizer's arrival, when known.
    #[serde(rename = "OrganizerArrival")]
    pub organizer_arrival: Option<String>,
    #[serde(rename = "GuestCount")]
    pub guest_count: Option<i64>,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "ExtraTasks", default)]
    pub extra_tasks: Vec<String>,
    #[serde(rename = "FoodAndBeverage", default)]
    pub food_and_beverage: Vec<FnbSlot>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            date: None,
            day_of_week: String::new(),
            start_time: None,
            end_time: None,
            room: String::new(),
            setup_type: String::new(),
            setup_number: None,
            organizer_name: String::new(),
            organizer_arrival: None,
            guest_count: None,
            notes: String::new(),
            extra_tasks: Vec::new(),
            food_and_beverage: Vec::new(),
        }
    }
}

/// One food-and-beverage service point within an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FnbSlot {
    /// `HH:MM` service time; plain string ordering matches clock ordering.
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Action")]
    pub action: String,
}

/// Day of week in the fixed display order used by the weekly schedule grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let day = match normalized.as_str() {
            "monday" => Weekday::Monday,
            "tuesday" => Weekday::Tuesday,
            "wednesday" => Weekday::Wednesday,
            "thursday" => Weekday::Thursday,
            "friday" => Weekday::Friday,
            "saturday" => Weekday::Saturday,
            "sunday" => Weekday::Sunday,
            _ => return Err(ModelError::UnknownWeekday(s.to_string())),
        };
        Ok(day)
    }
}
