//! Guest-record value types.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One normalized row of imported tabular guest data.
///
/// Records are immutable value objects with no identity beyond their field
/// values; the importer constructs them and ownership passes entirely to the
/// caller. Serialized field names match the exported JSON documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestRecord {
    pub room: String,
    pub guest_name: String,
    /// Canonical `YYYY-MM-DD`, or empty / verbatim if unparseable.
    pub arrival_date: String,
    pub departure_date: String,
    pub rate_code: String,
    /// Upper-cased meal plan code (`BB`, `RO`, others pass through).
    pub meal_plan: String,
    pub company: String,
    pub adults: Count,
    pub children: Count,
    pub infants: Count,
    pub notes: String,
}

impl GuestRecord {
    /// A record is kept only when `room` or `guestName` survives trimming.
    pub fn is_retained(&self) -> bool {
        !self.room.trim().is_empty() || !self.guest_name.trim().is_empty()
    }
}

/// An integer count, or the empty-string sentinel when the source value was
/// not a finite number. The sentinel is distinct from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Count {
    #[default]
    Unknown,
    Known(i64),
}

impl Count {
    /// Best-effort coercion of a raw cell value.
    ///
    /// Non-numeric input yields `Unknown`, never zero and never an error.
    pub fn parse(raw: &str) -> Count {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Count::Known(value as i64),
            _ => Count::Unknown,
        }
    }

    pub fn as_known(&self) -> Option<i64> {
        match self {
            Count::Known(value) => Some(*value),
            Count::Unknown => None,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Known(value) => write!(f, "{value}"),
            Count::Unknown => Ok(()),
        }
    }
}

impl Serialize for Count {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Count::Known(value) => serializer.serialize_i64(*value),
            Count::Unknown => serializer.serialize_str(""),
        }
    }
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = Count;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer count or empty-string sentinel")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Count, E> {
        Ok(Count::Known(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Count, E> {
        Ok(Count::Known(value as i64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Count, E> {
        if value.is_finite() {
            Ok(Count::Known(value as i64))
        } else {
            Ok(Count::Unknown)
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Count, E> {
        Ok(Count::parse(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Count, E> {
        Ok(Count::Unknown)
    }

    fn visit_none<E: de::Error>(self) -> Result<Count, E> {
        Ok(Count::Unknown)
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Count, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }
}

/// Classification of a meal-plan code for filtering and display.
///
/// Classification never restricts the stored string; unrecognized codes stay
/// on the record verbatim (upper-cased) and classify as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealService {
    Breakfast,
    RoomOnly,
    Other,
}

impl MealService {
    pub fn classify(plan: &str) -> MealService {
        match plan.trim().to_uppercase().as_str() {
            "BB" => MealService::Breakfast,
            "RO" => MealService::RoomOnly,
            _ => MealService::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealService::Breakfast => "Breakfast included",
            MealService::RoomOnly => "Room only",
            MealService::Other => "Plan",
        }
    }
}
